/*
[INPUT]:  Binance futures API enum values and operator input strings
[OUTPUT]: Typed Rust enums with serialization and parsing support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new order kinds are supported
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Lenient normalization: `"buy"` in any case maps to `Buy`, every other
    /// string maps to `Sell`. A typo therefore silently becomes a sell order;
    /// prefer [`Side::from_str`] for operator input.
    pub fn normalize(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("BUY") {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("BUY") {
            Ok(Side::Buy)
        } else if value.eq_ignore_ascii_case("SELL") {
            Ok(Side::Sell)
        } else {
            Err(format!("unknown side '{value}', expected BUY or SELL"))
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    Market,
    Limit,
    StopMarket,
    Stop,
    TakeProfit,
    TakeProfitMarket,
    TrailingStopMarket,
}

impl OrderKind {
    /// Kinds offered by the front ends.
    pub const SUPPORTED: [OrderKind; 3] = [OrderKind::Market, OrderKind::Limit, OrderKind::StopMarket];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopMarket => "STOP_MARKET",
            OrderKind::Stop => "STOP",
            OrderKind::TakeProfit => "TAKE_PROFIT",
            OrderKind::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            OrderKind::TrailingStopMarket => "TRAILING_STOP_MARKET",
        }
    }

    pub fn requires_price(&self) -> bool {
        matches!(self, OrderKind::Limit)
    }

    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderKind::StopMarket)
    }
}

impl FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => OrderKind::Market,
            "LIMIT" => OrderKind::Limit,
            "STOP_MARKET" => OrderKind::StopMarket,
            "STOP" => OrderKind::Stop,
            "TAKE_PROFIT" => OrderKind::TakeProfit,
            "TAKE_PROFIT_MARKET" => OrderKind::TakeProfitMarket,
            "TRAILING_STOP_MARKET" => OrderKind::TrailingStopMarket,
            other => return Err(format!("unknown order type '{other}'")),
        };
        Ok(kind)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    #[serde(rename = "GTC")]
    Gtc,
    #[serde(rename = "IOC")]
    Ioc,
    #[serde(rename = "FOK")]
    Fok,
    #[serde(rename = "GTX")]
    PostOnly,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::PostOnly => "GTX",
        }
    }
}
