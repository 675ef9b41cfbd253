/*
[INPUT]:  Order parameters and a synchronized request timestamp
[OUTPUT]: Raw order-creation response
[POS]:    HTTP layer - trading endpoints (require API key + query signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{FuturesClient, Result};
use crate::types::OrderParams;
use reqwest::Method;

impl FuturesClient {
    /// Create a new order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + signed query string
    pub async fn new_order(&self, params: &OrderParams, timestamp_ms: i64) -> Result<serde_json::Value> {
        let builder = self.signed_request(Method::POST, "fapi/v1/order", params, timestamp_ms)?;
        self.send_json(builder).await
    }
}
