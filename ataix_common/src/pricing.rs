//! Discounted limit price calculator.
//!
//! `raw = bid * (1 - discount / 100)`, then floored to a multiple of the exchange's
//! price step and fixed at [`PRICE_SCALE`] fractional digits. Flooring (never rounding
//! to nearest) keeps the price at or below the requested discount.
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ExchangeError;

/// Fractional digits of every computed price.
pub const PRICE_SCALE: u32 = 8;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Compute a limit price `discount` percent below `bid`, floored to `step`.
///
/// - bid: reference best bid, must be positive.
/// - discount: percentage in `[0, 100)`.
/// - step: minimum price increment, must be positive.
/// - Returns: a non-negative multiple of `step` with exactly eight fractional digits.
pub fn discounted_price(
    bid: Decimal,
    discount: Decimal,
    step: Decimal,
) -> Result<Decimal, ExchangeError> {
    if bid <= Decimal::ZERO {
        return Err(ExchangeError::InvalidMarketData(format!(
            "reference bid must be positive, got {}",
            bid
        )));
    }
    if step <= Decimal::ZERO {
        return Err(ExchangeError::InvalidPrecision(format!(
            "price step must be positive, got {}",
            step
        )));
    }
    if discount < Decimal::ZERO || discount >= HUNDRED {
        return Err(ExchangeError::InvalidOrder(format!(
            "discount must be within [0, 100), got {}",
            discount
        )));
    }

    let out_of_range = || {
        ExchangeError::InvalidPrecision(format!(
            "bid {} with step {} exceeds decimal range",
            bid, step
        ))
    };
    let raw = bid
        .checked_mul(Decimal::ONE - discount / HUNDRED)
        .ok_or_else(out_of_range)?;
    let floored = raw
        .checked_div(step)
        .and_then(|steps| steps.floor().checked_mul(step))
        .ok_or_else(out_of_range)?;
    // Truncate rather than round: steps finer than 1e-8 must not push the price up.
    let mut adjusted = floored.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::ToZero);
    adjusted.rescale(PRICE_SCALE);
    if adjusted.scale() != PRICE_SCALE {
        return Err(out_of_range());
    }
    Ok(adjusted)
}
