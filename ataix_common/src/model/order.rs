//! Order request body for `POST /api/orders`.
//!
//! Prices and quantities are sent as decimal strings (`"2760.00000000"`), never as
//! JSON floats, so the exchange sees exactly the value that was computed.
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ExchangeError;

/// Order direction.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, Display, EnumString, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    Buy,
    Sell,
}

/// Order type.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, Display, EnumString, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderType {
    Limit,
    Market,
}

/// Time in force, sent as `subType`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TimeInForce {
    /// Good till cancelled.
    #[default]
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
}

/// Immutable order body. Build it with [`OrderRequest::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Pair in `BASE/QUOTE` form.
    pub symbol: String,
    /// Buy or sell.
    pub side: Side,
    /// Limit or market.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order size in base currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    /// Limit price; absent for market orders.
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Time in force.
    #[serde(rename = "subType")]
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    /// Validate and build an order body.
    ///
    /// Quantity must be positive. Limit orders need a positive price; a price given
    /// for a market order is dropped.
    pub fn new(
        symbol: &str,
        side: Side,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        time_in_force: TimeInForce,
    ) -> Result<Self, ExchangeError> {
        if quantity <= Decimal::ZERO {
            return Err(ExchangeError::InvalidOrder(format!(
                "quantity must be positive, got {}",
                quantity
            )));
        }
        let price = match order_type {
            OrderType::Market => None,
            OrderType::Limit => match price {
                Some(p) if p > Decimal::ZERO => Some(p),
                Some(p) => {
                    return Err(ExchangeError::InvalidOrder(format!(
                        "limit price must be positive, got {}",
                        p
                    )));
                }
                None => {
                    return Err(ExchangeError::InvalidOrder(String::from(
                        "limit order needs a price or a discount",
                    )));
                }
            },
        };

        Ok(OrderRequest {
            symbol: String::from(symbol),
            side,
            order_type,
            quantity,
            price,
            time_in_force,
        })
    }
}
