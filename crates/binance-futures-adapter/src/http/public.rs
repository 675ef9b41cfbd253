/*
[INPUT]:  None (unsigned market endpoints)
[OUTPUT]: Exchange server time
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{FuturesClient, Result};
use crate::types::ServerTimeResponse;
use reqwest::Method;

impl FuturesClient {
    /// Query exchange server time in epoch milliseconds
    ///
    /// GET /fapi/v1/time
    pub async fn get_server_time(&self) -> Result<i64> {
        let builder = self.public_request(Method::GET, "fapi/v1/time")?;
        let response: ServerTimeResponse = self.send_json(builder).await?;
        Ok(response.server_time)
    }
}
