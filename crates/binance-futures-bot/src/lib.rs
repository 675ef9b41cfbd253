/*
[INPUT]:  Public API exports for the binance-futures-bot crate
[OUTPUT]: Module declarations and public re-exports shared by both front ends
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod form;
pub mod logging;
pub mod session;

pub use form::OrderForm;
pub use logging::{LogBuffer, LogBufferHandle};
pub use session::{Session, summarize_outcome};
