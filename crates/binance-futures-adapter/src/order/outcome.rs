/*
[INPUT]:  Raw order responses and adapter errors
[OUTPUT]: Uniform OrderOutcome values for front ends
[POS]:    Core - result normalization types
[UPDATE]: When the failure taxonomy or success payload changes
*/

use std::fmt;

use crate::http::FuturesError;

/// Category of a failed order attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected locally before any network call
    Validation,
    /// Structured rejection from the exchange
    Exchange,
    /// Network, serialization or response-shape failure
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Validation => "validation error",
            FailureKind::Exchange => "exchange error",
            FailureKind::Transport => "transport error",
        };
        f.write_str(label)
    }
}

/// Accepted order as acknowledged by the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAck {
    pub order_id: i64,
    pub status: String,
    /// Full response body
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFailure {
    pub kind: FailureKind,
    pub message: String,
    pub code: Option<i64>,
}

impl From<FuturesError> for OrderFailure {
    fn from(err: FuturesError) -> Self {
        Self {
            kind: err.failure_kind(),
            message: err.operator_message(),
            code: err.code(),
        }
    }
}

/// Result of one order attempt. Every boundary call returns one of these;
/// errors are never propagated past the submitter.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Success(OrderAck),
    Failure(OrderFailure),
}

impl OrderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderOutcome::Success(_))
    }

    pub fn ack(&self) -> Option<&OrderAck> {
        match self {
            OrderOutcome::Success(ack) => Some(ack),
            OrderOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&OrderFailure> {
        match self {
            OrderOutcome::Success(_) => None,
            OrderOutcome::Failure(failure) => Some(failure),
        }
    }
}

impl From<FuturesError> for OrderOutcome {
    fn from(err: FuturesError) -> Self {
        OrderOutcome::Failure(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_from_api_error_keeps_message_and_code() {
        let outcome: OrderOutcome = FuturesError::Api {
            code: -2019,
            message: "Insufficient margin".into(),
        }
        .into();

        let failure = outcome.failure().expect("failure");
        assert_eq!(failure.kind, FailureKind::Exchange);
        assert_eq!(failure.message, "Insufficient margin");
        assert_eq!(failure.code, Some(-2019));
        assert!(!outcome.is_success());
        assert!(outcome.ack().is_none());
    }

    #[test]
    fn failure_kind_labels() {
        assert_eq!(FailureKind::Validation.to_string(), "validation error");
        assert_eq!(FailureKind::Transport.to_string(), "transport error");
    }
}
