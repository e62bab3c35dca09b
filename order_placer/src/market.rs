//! Market snapshot lookup for one pair.
use ataix_common::model::market::MarketSnapshot;
use ataix_common::{ExchangeApi, ExchangeError, Result};
use log::info;

/// Fetch the listing and build a validated snapshot for `symbol` (exact match).
pub fn fetch_snapshot<A: ExchangeApi>(api: &A, symbol: &str) -> Result<MarketSnapshot> {
    let listing = api.symbols()?;
    let info = listing
        .iter()
        .find(|entry| entry.symbol == symbol)
        .ok_or_else(|| ExchangeError::NotFound(String::from(symbol)))?;
    let snapshot = MarketSnapshot::try_from(info)?;
    info!(
        "{}: bid={} ask={} last={} minTradeSize={} step={}",
        snapshot.symbol,
        snapshot.bid,
        snapshot.ask,
        snapshot.last_price,
        snapshot.min_trade_size,
        snapshot.price_step
    );
    Ok(snapshot)
}
