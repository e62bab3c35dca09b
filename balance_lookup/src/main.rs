//! Balance Lookup — prints the available balance of one asset on an ATAIX account.
//!
//! Usage example (CLI):
//! ```bash
//! ATAIX_API_KEY=... balance_lookup --asset USDT
//! ```
#![warn(missing_docs)]
mod args;
mod resolver;

use crate::args::Args;
use crate::resolver::BalanceResolver;
use ataix_common::{Credentials, HttpExchange, Result};
use clap::Parser;
use log::error;
use rust_decimal::Decimal;
use std::process::ExitCode;

fn run(args: &Args) -> Result<Decimal> {
    let exchange = HttpExchange::new(&args.base_url)?;
    let credentials = Credentials::new(&args.api_key);
    BalanceResolver::new(&exchange, &credentials).resolve(&args.asset)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(available) => {
            println!("{} {}", available, args.asset.trim().to_uppercase());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Balance lookup for {} failed: {}", args.asset, e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
