//! Error types shared by all tools.
//!
//! The `ExchangeError` enum separates failures that came back from the exchange
//! (unknown symbol, missing prices, rejected credentials) from failures to talk to
//! it at all (`Transport`), so callers can tell "the exchange said no" apart from
//! "the request never made it".
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the binaries.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The requested symbol is not present in the exchange listing.
    #[error("Symbol not found: {0}")]
    NotFound(String),

    /// No usable data could be obtained from any source.
    #[error("Data unavailable: {0}")]
    Unavailable(String),

    /// Reference market data is unusable (e.g. a non-positive bid).
    #[error("Invalid market data: {0}")]
    InvalidMarketData(String),

    /// Price step is non-positive or the precision cannot be turned into a step.
    #[error("Invalid price precision: {0}")]
    InvalidPrecision(String),

    /// Order parameters are inconsistent (missing price, discount out of range, ...).
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Asset code is empty or not a plain currency code.
    #[error("Invalid asset code: {0:?}")]
    InvalidAsset(String),

    /// The exchange rejected the supplied API key.
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// Network failure or a response body that could not be decoded.
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error from the local filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::Transport(err.to_string())
    }
}

impl ExchangeError {
    /// `true` when the failure happened before the exchange produced a usable answer
    /// (network down, TLS, undecodable body).
    pub fn is_transport(&self) -> bool {
        matches!(self, ExchangeError::Transport(_))
    }
}
