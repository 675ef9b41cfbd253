/*
[INPUT]:  Binance futures API response payloads
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTimeResponse {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Structured error body returned on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// Fields of the order-creation response the desk relies on.
///
/// The full payload is kept as raw JSON; this view only extracts identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    pub status: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "clientOrderId", default)]
    pub client_order_id: Option<String>,
}
