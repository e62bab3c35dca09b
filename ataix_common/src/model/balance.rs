//! Account balance payload returned by `/api/user/balances/<ASSET>`.
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::model::decimal::optional_decimal;

/// Balance of one asset. Only `available` is required; reserved/total amounts are
/// informational and may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceInfo {
    /// Amount free for trading.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub available: Option<Decimal>,
    /// Amount locked in open orders.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub reserved: Option<Decimal>,
    /// Total held.
    #[serde(default, deserialize_with = "optional_decimal")]
    pub total: Option<Decimal>,
}
