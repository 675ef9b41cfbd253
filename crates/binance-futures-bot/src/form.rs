/*
[INPUT]:  Raw operator text for each order field
[OUTPUT]: Missing-field checks and parsed OrderRequest values
[POS]:    Shared order entry model used by prompt and form modes
[UPDATE]: When order fields or their per-kind requirements change
*/

use rust_decimal::Decimal;

use binance_futures_adapter::{OrderKind, OrderRequest, Side};

/// Order entry as typed by the operator. Side and kind are always set; the
/// numeric fields stay as text until [`OrderForm::to_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub symbol: String,
    pub side: Side,
    pub kind: OrderKind,
    pub quantity: String,
    pub price: String,
    pub stop_price: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            side: Side::Buy,
            kind: OrderKind::Market,
            quantity: String::new(),
            price: String::new(),
            stop_price: String::new(),
        }
    }
}

impl OrderForm {
    /// Labels of the required fields that are still blank for the selected kind.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.symbol.trim().is_empty() {
            missing.push("symbol");
        }
        if self.quantity.trim().is_empty() {
            missing.push("quantity");
        }
        if self.kind.requires_price() && self.price.trim().is_empty() {
            missing.push("price");
        }
        if self.kind.requires_stop_price() && self.stop_price.trim().is_empty() {
            missing.push("stop price");
        }
        missing
    }

    pub fn is_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Parse into a request. Price fields are only read when the kind uses them.
    pub fn to_request(&self) -> Result<OrderRequest, String> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(format!("missing required fields: {}", missing.join(", ")));
        }

        let quantity = parse_positive_decimal("quantity", &self.quantity)?;
        let mut request = OrderRequest::new(self.symbol.trim(), self.side, self.kind, quantity);
        if self.kind.requires_price() {
            request = request.with_price(parse_positive_decimal("price", &self.price)?);
        }
        if self.kind.requires_stop_price() {
            request = request.with_stop_price(parse_positive_decimal("stop price", &self.stop_price)?);
        }
        Ok(request)
    }
}

pub fn parse_positive_decimal(field: &str, input: &str) -> Result<Decimal, String> {
    let value: Decimal = input
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a number, got '{}'", input.trim()))?;
    if value <= Decimal::ZERO {
        return Err(format!("{field} must be greater than zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: OrderKind) -> OrderForm {
        OrderForm {
            symbol: "btcusdt".into(),
            kind,
            quantity: "0.01".into(),
            ..OrderForm::default()
        }
    }

    #[test]
    fn market_needs_only_symbol_and_quantity() {
        assert!(form(OrderKind::Market).is_ready());
        assert_eq!(
            OrderForm::default().missing_fields(),
            vec!["symbol", "quantity"]
        );
    }

    #[test]
    fn limit_is_blocked_until_price_present() {
        let mut entry = form(OrderKind::Limit);
        assert_eq!(entry.missing_fields(), vec!["price"]);
        assert_eq!(
            entry.to_request().unwrap_err(),
            "missing required fields: price"
        );

        entry.price = "12345.6".into();
        let request = entry.to_request().unwrap();
        assert_eq!(request.price, Some("12345.6".parse().unwrap()));
        assert_eq!(request.stop_price, None);
    }

    #[test]
    fn stop_market_requires_stop_price_not_price() {
        let mut entry = form(OrderKind::StopMarket);
        entry.price = "100".into();
        assert_eq!(entry.missing_fields(), vec!["stop price"]);

        entry.stop_price = "30000".into();
        let request = entry.to_request().unwrap();
        assert_eq!(request.stop_price, Some("30000".parse().unwrap()));
        assert_eq!(request.price, None);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut entry = form(OrderKind::Market);
        entry.symbol = "   ".into();
        assert_eq!(entry.missing_fields(), vec!["symbol"]);
    }

    #[test]
    fn bad_numbers_are_reported_by_field() {
        let mut entry = form(OrderKind::Market);
        entry.quantity = "abc".into();
        assert_eq!(
            entry.to_request().unwrap_err(),
            "quantity must be a number, got 'abc'"
        );

        entry.quantity = "0".into();
        assert_eq!(
            entry.to_request().unwrap_err(),
            "quantity must be greater than zero"
        );
    }

    #[test]
    fn parse_positive_decimal_trims_input() {
        assert_eq!(
            parse_positive_decimal("price", " 25000.50 ").unwrap(),
            "25000.5".parse::<Decimal>().unwrap()
        );
        assert!(parse_positive_decimal("price", "-1").is_err());
    }
}
