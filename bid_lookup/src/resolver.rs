//! Best bid resolution.
//!
//! The listing usually carries a `bid` per pair. When it is missing or zeroed out the
//! resolver falls back to the top of the order book for that pair.
use ataix_common::net::depth_symbol;
use ataix_common::{ExchangeApi, ExchangeError, Result};
use log::{debug, info};
use rust_decimal::Decimal;

/// Resolves the best bid of a pair through an [`ExchangeApi`].
pub struct BidResolver<'a, A: ExchangeApi> {
    api: &'a A,
}

impl<'a, A: ExchangeApi> BidResolver<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Best bid for `symbol` (exact, case-sensitive match against the listing).
    ///
    /// Fails with `NotFound` when the pair is not listed, and with `Unavailable` when
    /// neither the listing nor the order book has a bid.
    pub fn resolve(&self, symbol: &str) -> Result<Decimal> {
        let listing = self.api.symbols()?;
        let pair = listing
            .iter()
            .find(|entry| entry.symbol == symbol)
            .ok_or_else(|| ExchangeError::NotFound(String::from(symbol)))?;

        if let Some(bid) = pair.usable_bid() {
            info!("{}: bid from listing {}", symbol, bid);
            return Ok(bid);
        }

        let depth_pair = depth_symbol(symbol);
        debug!("{}: listing has no bid, querying depth for {}", symbol, depth_pair);
        let depth = self.api.depth(&depth_pair)?;
        match depth.best_bid() {
            Some(bid) => {
                info!("{}: bid from order book {}", symbol, bid);
                Ok(bid)
            }
            None => Err(ExchangeError::Unavailable(format!(
                "{}: no active bids",
                symbol
            ))),
        }
    }
}
