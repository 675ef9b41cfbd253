/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{ClientConfig, Clock, Credentials, FuturesClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Test API credentials
pub fn test_credentials() -> Credentials {
    Credentials::new("test-api-key", "test-api-secret").expect("test credentials")
}

/// Signed client pointed at the mock server
#[allow(dead_code)]
pub fn signed_client(server: &MockServer) -> FuturesClient {
    FuturesClient::with_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(test_credentials())
}

/// Clock frozen at a fixed instant
#[allow(dead_code)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
