/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod gateway;
pub mod public;
pub mod signature;
pub mod trade;

pub use error::{FuturesError, Result};
pub use gateway::{ExchangeGateway, MockGateway, MockOrderReply};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, DEFAULT_RECV_WINDOW_MS, FuturesClient, Network};
