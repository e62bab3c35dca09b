//! Lenient decimal decoding.
//!
//! The listing endpoint mixes `"3000.50"`, `3000.5`, `null` and `""` for the same
//! field depending on the market, so optional price fields go through
//! [`optional_decimal`] instead of the stock `Decimal` deserializer.
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Parse a decimal literal, accepting scientific notation (`1e-5`).
pub fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))
}

/// `deserialize_with` helper: `null`, missing and blank strings become `None`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_decimal(&s).map(Some).map_err(de::Error::custom),
        Some(Value::Number(n)) => parse_decimal(&n.to_string())
            .map(Some)
            .map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "expected a decimal string or number, got {}",
            other
        ))),
    }
}
