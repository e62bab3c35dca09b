//! Typed records exchanged with the ATAIX REST API.
//!
//! - `market` — symbol listing entries, market snapshots and order book depth.
//! - `balance` — account balance payloads.
//! - `order` — order request body and its enum fields.
//! - `decimal` — lenient decimal decoding for fields that arrive as strings or numbers.
use serde::Deserialize;

pub mod balance;
pub mod decimal;
pub mod market;
pub mod order;

/// Standard `{status, result}` wrapper used by most endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// `true` when the exchange handled the request successfully.
    #[serde(default)]
    pub status: bool,
    /// Payload, absent on most failures.
    pub result: Option<T>,
}
