//! Market data records: listing entries, snapshots and order book depth.
//!
//! `SymbolInfo` is what `/api/symbols` returns per trading pair. `MarketSnapshot` is
//! the validated view the order flow works with: all prices present (missing ones are
//! zero) and the price precision already turned into a step such as `0.01`.
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::model::decimal::optional_decimal;

/// Number of fractional digits assumed when a listing entry has no `pricePrecision`.
pub const DEFAULT_PRICE_PRECISION: u32 = 3;
/// Largest scale a `Decimal` can represent.
const MAX_PRICE_PRECISION: u32 = 28;

/// One entry of the symbol listing. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Pair in `BASE/QUOTE` form, e.g. `ETH/USDT`.
    pub symbol: String,
    /// Best bid, `0.0000000000` or missing when there is none.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub bid: Option<Decimal>,
    /// Best ask.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub ask: Option<Decimal>,
    /// Last traded price.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub price: Option<Decimal>,
    /// Minimum order quantity.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub min_trade_size: Option<Decimal>,
    /// Number of fractional digits accepted in prices.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub price_precision: Option<Decimal>,
}

impl SymbolInfo {
    /// Bid if present and strictly positive.
    pub fn usable_bid(&self) -> Option<Decimal> {
        self.bid.filter(|bid| bid.is_sign_positive() && !bid.is_zero())
    }

    /// Minimum price increment derived from `pricePrecision` (`10^-precision`).
    pub fn price_step(&self) -> Result<Decimal, ExchangeError> {
        let precision = match self.price_precision {
            None => return Ok(Decimal::new(1, DEFAULT_PRICE_PRECISION)),
            Some(p) => p,
        };
        if !precision.fract().is_zero() || precision.is_sign_negative() {
            return Err(ExchangeError::InvalidPrecision(format!(
                "{}: pricePrecision {} is not a whole number of digits",
                self.symbol, precision
            )));
        }
        let digits = precision
            .to_u32()
            .filter(|d| *d <= MAX_PRICE_PRECISION)
            .ok_or_else(|| {
                ExchangeError::InvalidPrecision(format!(
                    "{}: pricePrecision {} is out of range",
                    self.symbol, precision
                ))
            })?;
        Decimal::try_new(1, digits)
            .map_err(|e| ExchangeError::InvalidPrecision(format!("{}: {}", self.symbol, e)))
    }
}

/// Validated market data for a single pair, fetched fresh for each operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Pair in `BASE/QUOTE` form.
    pub symbol: String,
    /// Best bid, zero when the listing has none.
    pub bid: Decimal,
    /// Best ask, zero when the listing has none.
    pub ask: Decimal,
    /// Last traded price.
    pub last_price: Decimal,
    /// Minimum order quantity.
    pub min_trade_size: Decimal,
    /// Minimum price increment.
    pub price_step: Decimal,
}

impl TryFrom<&SymbolInfo> for MarketSnapshot {
    type Error = ExchangeError;

    fn try_from(info: &SymbolInfo) -> Result<Self, Self::Error> {
        Ok(MarketSnapshot {
            symbol: info.symbol.clone(),
            bid: info.bid.unwrap_or_default(),
            ask: info.ask.unwrap_or_default(),
            last_price: info.price.unwrap_or_default(),
            min_trade_size: info.min_trade_size.unwrap_or_default(),
            price_step: info.price_step()?,
        })
    }
}

/// A single `[price, volume]` level.
pub type DepthLevel = (Decimal, Decimal);

/// Order book depth as returned by `/api/depth`, best levels first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBookDepth {
    /// Buy side.
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
    /// Sell side.
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
}

impl OrderBookDepth {
    /// Price of the top bid level.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|(price, _)| *price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing_entry(json: &str) -> SymbolInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_listing_entry_with_extra_fields() {
        let info = listing_entry(
            r#"{"symbol":"ETH/USDT","bid":"3000.12","ask":3001,"price":"3000.5",
                "minTradeSize":"0.00001","pricePrecision":2,"base":"ETH","quote":"USDT"}"#,
        );
        assert_eq!(info.symbol, "ETH/USDT");
        assert_eq!(info.bid, Some(dec!(3000.12)));
        assert_eq!(info.ask, Some(dec!(3001)));
        assert_eq!(info.min_trade_size, Some(dec!(0.00001)));
        assert_eq!(info.price_step().unwrap(), dec!(0.01));
    }

    #[test]
    fn zero_bid_is_not_usable() {
        let info = listing_entry(r#"{"symbol":"ETH/USDT","bid":"0.0000000000"}"#);
        assert_eq!(info.usable_bid(), None);
        let info = listing_entry(r#"{"symbol":"ETH/USDT"}"#);
        assert_eq!(info.usable_bid(), None);
        let info = listing_entry(r#"{"symbol":"ETH/USDT","bid":"12.5"}"#);
        assert_eq!(info.usable_bid(), Some(dec!(12.5)));
    }

    #[test]
    fn missing_precision_defaults_to_three_digits() {
        let info = listing_entry(r#"{"symbol":"ETH/USDT"}"#);
        assert_eq!(info.price_step().unwrap(), dec!(0.001));
    }

    #[test]
    fn bad_precision_is_rejected() {
        for raw in ["-1", "2.5", "40"] {
            let info = listing_entry(&format!(
                r#"{{"symbol":"ETH/USDT","pricePrecision":"{}"}}"#,
                raw
            ));
            assert!(matches!(
                info.price_step(),
                Err(ExchangeError::InvalidPrecision(_))
            ));
        }
    }

    #[test]
    fn snapshot_fills_missing_prices_with_zero() {
        let info = listing_entry(r#"{"symbol":"ETH/USDT","bid":"3000","pricePrecision":"2"}"#);
        let snapshot = MarketSnapshot::try_from(&info).unwrap();
        assert_eq!(snapshot.bid, dec!(3000));
        assert_eq!(snapshot.ask, Decimal::ZERO);
        assert_eq!(snapshot.last_price, Decimal::ZERO);
        assert_eq!(snapshot.price_step, dec!(0.01));
    }

    #[test]
    fn depth_best_bid_is_first_level() {
        let depth: OrderBookDepth =
            serde_json::from_str(r#"{"bids":[["2999.5","1.2"],[2999.4,3]],"asks":[]}"#).unwrap();
        assert_eq!(depth.best_bid(), Some(dec!(2999.5)));

        let empty: OrderBookDepth = serde_json::from_str(r#"{"asks":[["3001","1"]]}"#).unwrap();
        assert_eq!(empty.best_bid(), None);
    }
}
