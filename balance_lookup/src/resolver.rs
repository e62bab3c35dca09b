//! Available balance lookup.
use ataix_common::{Credentials, ExchangeApi, ExchangeError, Result};
use log::info;
use rust_decimal::Decimal;

/// Reads the available (non-reserved) balance of one asset.
pub struct BalanceResolver<'a, A: ExchangeApi> {
    api: &'a A,
    credentials: &'a Credentials,
}

impl<'a, A: ExchangeApi> BalanceResolver<'a, A> {
    pub fn new(api: &'a A, credentials: &'a Credentials) -> Self {
        Self { api, credentials }
    }

    /// Available balance of `asset`. The code is upper-cased before the request and
    /// must be a non-empty run of ASCII letters and digits.
    pub fn resolve(&self, asset: &str) -> Result<Decimal> {
        let asset = asset.trim().to_uppercase();
        if asset.is_empty() || !asset.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ExchangeError::InvalidAsset(asset));
        }
        let available = self.api.balance(&asset, self.credentials)?;
        info!("{}: available balance {}", asset, available);
        Ok(available)
    }
}
