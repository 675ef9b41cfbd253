/*
[INPUT]:  Order parameters, request timestamps
[OUTPUT]: Server time and raw order responses behind a mockable seam
[POS]:    HTTP layer - exchange abstraction consumed by sync and order modules
[UPDATE]: When the core components need another exchange call
*/

use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{FuturesClient, FuturesError, Result};
use crate::types::OrderParams;

/// Exchange calls used by the time synchronizer and the order submitter.
///
/// Implemented by [`FuturesClient`]; tests substitute scripted gateways.
#[async_trait]
pub trait ExchangeGateway: Send + Sync {
    /// Exchange server time in epoch milliseconds
    async fn server_time(&self) -> Result<i64>;

    /// Submit one order; `timestamp_ms` is already offset-corrected
    async fn new_order(&self, params: &OrderParams, timestamp_ms: i64) -> Result<serde_json::Value>;
}

#[async_trait]
impl ExchangeGateway for FuturesClient {
    async fn server_time(&self) -> Result<i64> {
        self.get_server_time().await
    }

    async fn new_order(&self, params: &OrderParams, timestamp_ms: i64) -> Result<serde_json::Value> {
        FuturesClient::new_order(self, params, timestamp_ms).await
    }
}

/// Scripted reply for [`MockGateway::new_order`]
#[derive(Debug, Clone)]
pub enum MockOrderReply {
    Accepted(serde_json::Value),
    Rejected { code: i64, message: String },
    Unreachable(String),
}

/// Mock gateway for testing
///
/// Returns a fixed server time (or a failure when unset) and a scripted
/// order reply, recording every submitted order.
#[derive(Debug)]
pub struct MockGateway {
    server_time: Option<i64>,
    order_reply: MockOrderReply,
    submitted: Mutex<Vec<(OrderParams, i64)>>,
}

impl MockGateway {
    pub fn new(order_reply: MockOrderReply) -> Self {
        Self {
            server_time: None,
            order_reply,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_server_time(mut self, server_time_ms: i64) -> Self {
        self.server_time = Some(server_time_ms);
        self
    }

    /// Orders received so far, with the timestamp they were signed with
    pub fn submitted(&self) -> Vec<(OrderParams, i64)> {
        self.submitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ExchangeGateway for MockGateway {
    async fn server_time(&self) -> Result<i64> {
        self.server_time
            .ok_or_else(|| FuturesError::InvalidResponse("time endpoint unavailable".to_string()))
    }

    async fn new_order(&self, params: &OrderParams, timestamp_ms: i64) -> Result<serde_json::Value> {
        self.submitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((params.clone(), timestamp_ms));

        match &self.order_reply {
            MockOrderReply::Accepted(body) => Ok(body.clone()),
            MockOrderReply::Rejected { code, message } => Err(FuturesError::Api {
                code: *code,
                message: message.clone(),
            }),
            MockOrderReply::Unreachable(reason) => Err(FuturesError::InvalidResponse(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_records_orders() {
        let gateway = MockGateway::new(MockOrderReply::Accepted(serde_json::json!({"orderId": 1})))
            .with_server_time(10);
        let mut params = OrderParams::new();
        params.insert("symbol", "BTCUSDT");

        assert_eq!(gateway.server_time().await.unwrap(), 10);
        gateway.new_order(&params, 99).await.unwrap();

        let submitted = gateway.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].1, 99);
        assert_eq!(submitted[0].0.get("symbol"), Some("BTCUSDT"));
    }

    #[tokio::test]
    async fn test_mock_gateway_without_server_time_fails() {
        let gateway = MockGateway::new(MockOrderReply::Unreachable("down".into()));
        assert!(gateway.server_time().await.is_err());
    }
}
