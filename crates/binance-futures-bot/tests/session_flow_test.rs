/*
[INPUT]:  Order forms submitted through a Session against a mock exchange
[OUTPUT]: End-to-end checks of form -> sync -> sign -> submit
[POS]:    Integration test layer - front-end plumbing
[UPDATE]: When session setup or form parsing changes
*/

use std::sync::Arc;

use binance_futures_adapter::{ClientConfig, Clock, Credentials, FailureKind, OrderKind, Side};
use binance_futures_bot::{OrderForm, Session, summarize_outcome};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOCAL_NOW: i64 = 1_700_000_000_000;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

async fn mount_server_time(server: &MockServer, server_time: i64) {
    Mock::given(method("GET"))
        .and(path("/fapi/v1/time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "serverTime": server_time })),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> Session {
    let credentials = assert_ok!(Credentials::new("desk-key", "desk-secret"));
    assert_ok!(
        Session::connect_with_clock(
            credentials,
            ClientConfig::default(),
            Some(&server.uri()),
            Arc::new(FixedClock(LOCAL_NOW)),
        )
        .await
    )
}

#[tokio::test]
async fn test_market_form_places_order() {
    let server = MockServer::start().await;
    mount_server_time(&server, LOCAL_NOW + 500).await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", "desk-key"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "MARKET"))
        .and(query_param("quantity", "0.01"))
        .and(query_param("timestamp", (LOCAL_NOW + 500).to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 8_389_765,
            "status": "NEW",
            "symbol": "BTCUSDT",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = connect(&server).await;
    assert_eq!(session.offset().as_millis(), 500);

    let form = OrderForm {
        symbol: "btcusdt".into(),
        side: Side::normalize("buy"),
        kind: OrderKind::Market,
        quantity: "0.01".into(),
        price: "999".into(),
        ..OrderForm::default()
    };
    let request = assert_ok!(form.to_request());
    let outcome = session.place(&request).await;

    let ack = outcome.ack().expect("expected success");
    assert_eq!(ack.order_id, 8_389_765);
    assert_eq!(summarize_outcome(&outcome), "Order placed: id 8389765 (NEW)");

    let requests = server.received_requests().await.expect("recorded requests");
    let order = requests
        .iter()
        .find(|req| req.url.path() == "/fapi/v1/order")
        .expect("order request");
    let query = order.url.query().unwrap_or_default();
    assert!(!query.contains("price="));
    assert!(query.contains("signature="));
}

#[tokio::test]
async fn test_limit_form_sends_price_and_gtc() {
    let server = MockServer::start().await;
    mount_server_time(&server, LOCAL_NOW).await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("price", "12345.6"))
        .and(query_param("timeInForce", "GTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 11,
            "status": "NEW",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = connect(&server).await;
    let form = OrderForm {
        symbol: "ETHUSDT".into(),
        side: Side::Sell,
        kind: OrderKind::Limit,
        quantity: "2".into(),
        price: "12345.60".into(),
        ..OrderForm::default()
    };

    let outcome = session.place(&assert_ok!(form.to_request())).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_exchange_rejection_reaches_operator() {
    let server = MockServer::start().await;
    mount_server_time(&server, LOCAL_NOW).await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -1111,
            "msg": "Precision is over the maximum defined for this asset.",
        })))
        .mount(&server)
        .await;

    let session = connect(&server).await;
    let form = OrderForm {
        symbol: "BTCUSDT".into(),
        kind: OrderKind::StopMarket,
        quantity: "0.0000001".into(),
        stop_price: "30000".into(),
        ..OrderForm::default()
    };

    let outcome = session.place(&assert_ok!(form.to_request())).await;
    let failure = outcome.failure().expect("expected failure");
    assert_eq!(failure.kind, FailureKind::Exchange);
    assert_eq!(
        failure.message,
        "Precision is over the maximum defined for this asset."
    );
    assert_eq!(failure.code, Some(-1111));
}
