/*
[INPUT]:  Order fields from command-line arguments
[OUTPUT]: Synchronized clock offset and the signed-ready order parameters
[POS]:    Examples - order construction against testnet time
[UPDATE]: When the builder or sync API changes
*/

use binance_futures_adapter::*;

/// Example: build order parameters and sync time against testnet
///
/// Usage: cargo run --example order_params_example -- BTCUSDT buy LIMIT 0.01 65000
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Order Params Example ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let symbol = args.first().cloned().unwrap_or_else(|| "BTCUSDT".to_string());
    let side = args.get(1).map(|s| Side::normalize(s)).unwrap_or(Side::Buy);
    let kind = args
        .get(2)
        .and_then(|s| s.parse::<OrderKind>().ok())
        .unwrap_or(OrderKind::Market);
    let quantity = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rust_decimal::Decimal::new(1, 2));
    let mut request = OrderRequest::new(symbol, side, kind, quantity);
    if let Some(price) = args.get(4).and_then(|s| s.parse().ok()) {
        request = match kind {
            OrderKind::StopMarket => request.with_stop_price(price),
            _ => request.with_price(price),
        };
    }

    let client = match FuturesClient::new(ClientConfig::for_network(Network::Testnet)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created ({})", client.base_url());

    let offset = TimeSynchronizer::new(&client, &SystemClock).sync().await;
    println!("✓ Clock offset: {}", offset);

    match build_order_params(&request) {
        Ok(params) => {
            println!("\nOrder parameters:");
            for (key, value) in params.iter() {
                println!("  {key} = {value}");
            }
            println!("\nQuery: {}", params.to_query_string());
        }
        Err(e) => eprintln!("\n✗ {}", e),
    }
}
