/*
[INPUT]:  OrderRequest from a front end
[OUTPUT]: Ordered OrderParams for POST /fapi/v1/order, or a validation error
[POS]:    Core - per-order-kind request construction (pure)
[UPDATE]: When an order kind gains or loses required fields
*/

use rust_decimal::Decimal;

use crate::http::{FuturesError, Result};
use crate::types::{OrderKind, OrderParams, OrderRequest, TimeInForce};

/// Map an order request onto the exchange request schema.
///
/// Always emits `symbol`, `side`, `type`, `quantity`. LIMIT adds `price` and
/// `timeInForce=GTC`; STOP_MARKET adds `stopPrice` and `timeInForce=GTC`.
/// Other kinds emit nothing else, even when a price was supplied.
pub fn build_order_params(request: &OrderRequest) -> Result<OrderParams> {
    let symbol = request.symbol.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(FuturesError::Validation("symbol is required".to_string()));
    }
    ensure_positive("quantity", request.quantity)?;

    let mut params = OrderParams::new();
    params.insert("symbol", symbol);
    params.insert("side", request.side.as_str());
    params.insert("type", request.kind.as_str());
    params.insert("quantity", format_decimal(request.quantity));

    match request.kind {
        OrderKind::Limit => {
            let price = required(request.price, "price", request.kind)?;
            params.insert("price", format_decimal(price));
            params.insert("timeInForce", TimeInForce::Gtc.as_str());
        }
        OrderKind::StopMarket => {
            let stop_price = required(request.stop_price, "stop price", request.kind)?;
            params.insert("stopPrice", format_decimal(stop_price));
            params.insert("timeInForce", TimeInForce::Gtc.as_str());
        }
        _ => {}
    }

    Ok(params)
}

fn required(value: Option<Decimal>, field: &str, kind: OrderKind) -> Result<Decimal> {
    let value = value
        .ok_or_else(|| FuturesError::Validation(format!("{field} is required for {kind} orders")))?;
    ensure_positive(field, value)?;
    Ok(value)
}

fn ensure_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(FuturesError::Validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Plain decimal text without trailing zeros (`0.0100` -> `0.01`).
fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
