/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use binance_futures_adapter::{
    ClientConfig, Credentials, ExchangeGateway, FailureKind, FuturesClient, FuturesError, Network,
    OrderParams,
};
use common::{setup_mock_server, signed_client, test_credentials};
use tokio_test::assert_ok;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(FuturesClient::new(ClientConfig::default()));
    assert_eq!(client.base_url().as_str(), "https://testnet.binancefuture.com/");
}

#[test]
fn test_client_with_mainnet_config() {
    let config = ClientConfig::for_network(Network::Mainnet);
    let client = assert_ok!(FuturesClient::new(config));
    assert_eq!(client.base_url().host_str(), Some("fapi.binance.com"));
}

#[test]
fn test_client_credentials_roundtrip() {
    let client = assert_ok!(FuturesClient::new(ClientConfig::default())).with_credentials(test_credentials());
    let stored = client.credentials().expect("credentials should be set");
    assert_eq!(stored.api_key(), "test-api-key");
}

#[test]
fn test_invalid_base_url() {
    let result = FuturesClient::with_base_url(ClientConfig::default(), "not a url");
    assert!(matches!(result, Err(FuturesError::UrlParse(_))));
}

#[test]
fn test_empty_credentials_rejected() {
    assert!(Credentials::new("", "").is_err());
}

#[tokio::test]
async fn test_gateway_server_time() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "serverTime": 1_699_999_999_999_i64,
        })))
        .mount(&server)
        .await;

    let client = assert_ok!(FuturesClient::with_base_url(ClientConfig::default(), &server.uri()));
    let gateway: &dyn ExchangeGateway = &client;
    let server_time = assert_ok!(gateway.server_time().await);
    assert_eq!(server_time, 1_699_999_999_999);
}

#[tokio::test]
async fn test_gateway_new_order_is_signed() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "ETHUSDT"))
        .and(query_param("timestamp", "1700000000000"))
        .and(header_exists("X-MBX-APIKEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 9,
            "status": "NEW",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let gateway: &dyn ExchangeGateway = &client;
    let mut params = OrderParams::new();
    params.insert("symbol", "ETHUSDT");

    let response = assert_ok!(gateway.new_order(&params, 1_700_000_000_000).await);
    assert_eq!(response["orderId"], 9);
}

/// Address with nothing listening: bind an ephemeral port, then release it.
fn closed_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let uri = closed_local_url();

    let client = assert_ok!(FuturesClient::with_base_url(ClientConfig::default(), &uri));
    let err = client.get_server_time().await.unwrap_err();
    assert!(matches!(err, FuturesError::Http(_)), "unexpected error: {err:?}");
    assert_eq!(err.failure_kind(), FailureKind::Transport);
}

#[tokio::test]
async fn test_base_url_path_prefix_reaches_server() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/binance/fapi/v1/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "serverTime": 1_700_000_000_123_i64,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/binance", server.uri());
    let client = assert_ok!(FuturesClient::with_base_url(ClientConfig::default(), &base));
    let server_time = assert_ok!(client.get_server_time().await);
    assert_eq!(server_time, 1_700_000_000_123);
}
