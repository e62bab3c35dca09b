//! Bid Lookup — prints the best current bid of one ATAIX trading pair.
//!
//! Usage example (CLI):
//! ```bash
//! bid_lookup --symbol ETH/USDT
//! ```
//!
//! The bid comes from the symbol listing; when the listing has none, the top of the
//! order book is used instead. The price is printed to stdout, diagnostics go to the log.
#![warn(missing_docs)]
mod args;
mod resolver;

use crate::args::Args;
use crate::resolver::BidResolver;
use ataix_common::{HttpExchange, Result};
use clap::Parser;
use log::{error, info};
use rust_decimal::Decimal;
use std::process::ExitCode;

fn run(args: &Args) -> Result<Decimal> {
    let exchange = HttpExchange::new(&args.base_url)?;
    info!("Resolving best bid for {} via {}", args.symbol, args.base_url);
    BidResolver::new(&exchange).resolve(&args.symbol)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(bid) => {
            println!("{}", bid);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Bid lookup for {} failed: {}", args.symbol, e);
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
