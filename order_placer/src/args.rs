//! Command-line arguments for the order placer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use crate::placer::OrderParams;
use crate::store::DEFAULT_RECORDS_DIR;
use ataix_common::model::order::{OrderType, Side, TimeInForce};
use ataix_common::net::BASE_URL;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Place a (discounted) limit order on ATAIX", long_about = None)]
pub struct Args {
    /// Trading pair in BASE/QUOTE form (case-sensitive).
    #[clap(long, default_value = "ETH/USDT")]
    pub symbol: String,

    /// Order side.
    #[clap(long, value_enum, default_value_t = Side::Buy)]
    pub side: Side,

    /// Order type.
    #[clap(long, value_enum, default_value_t = OrderType::Limit)]
    pub order_type: OrderType,

    /// Quantity in base currency.
    #[clap(long)]
    pub quantity: Decimal,

    /// Limit price, used only when --discount is 0.
    #[clap(long)]
    pub price: Option<Decimal>,

    /// Percent below the current bid to place the limit price at.
    #[clap(long, default_value = "0")]
    pub discount: Decimal,

    /// Time in force, sent as subType.
    #[clap(long, value_enum, default_value_t = TimeInForce::Gtc)]
    pub time_in_force: TimeInForce,

    /// Directory for the JSON order records.
    #[clap(long, default_value = DEFAULT_RECORDS_DIR)]
    pub records_dir: PathBuf,

    /// API key sent as X-API-Key.
    #[clap(long, env = "ATAIX_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Exchange REST base URL.
    #[clap(long, env = "ATAIX_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
}

impl Args {
    /// Order parameters for the placement flow.
    pub fn order_params(&self) -> OrderParams {
        OrderParams {
            symbol: self.symbol.clone(),
            side: self.side,
            order_type: self.order_type,
            quantity: self.quantity,
            price: self.price,
            discount: self.discount,
            time_in_force: self.time_in_force,
        }
    }
}
