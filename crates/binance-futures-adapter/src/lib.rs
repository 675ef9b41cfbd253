/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod order;
pub mod sync;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    ExchangeGateway,
    FuturesClient,
    FuturesError,
    Network,
    RequestSigner,
    Result,
};

// Re-export the core order flow
pub use order::{
    FailureKind,
    OrderAck,
    OrderFailure,
    OrderOutcome,
    OrderSubmitter,
    build_order_params,
};

pub use sync::{Clock, ClockOffset, SystemClock, TimeSynchronizer};

// Re-export all types
pub use types::*;
