/*
[INPUT]:  Operator order requests
[OUTPUT]: Built parameters, submission and normalized outcomes
[POS]:    Core - order construction and submission
[UPDATE]: When adding order kinds or changing the outcome taxonomy
*/

pub mod builder;
pub mod outcome;
pub mod submitter;

pub use builder::build_order_params;
pub use outcome::{FailureKind, OrderAck, OrderFailure, OrderOutcome};
pub use submitter::OrderSubmitter;
