//! Order Placer — places one limit (or market) order on ATAIX and records the attempt.
//!
//! Usage example (CLI):
//! ```bash
//! ATAIX_API_KEY=... order_placer --symbol ETH/USDT --side buy --quantity 0.00001 --discount 8
//! ```
//!
//! The flow fetches the pair's market data, derives the limit price from the current
//! bid when `--discount` is non-zero (floored to the pair's price step), submits the
//! order and writes a JSON record to `--records-dir`:
//!
//! - `order_success_*` — the exchange accepted the order;
//! - `order_failed_*` — the exchange answered and rejected it;
//! - `error_*` — the exchange could not be reached or answered garbage;
//! - `aborted_*` — nothing was sent (unknown pair, unusable bid or precision, bad input).
//!
//! The market data the order was based on (bid, ask, price step) is printed to stdout,
//! followed by the record as pretty JSON; the exit code is 0 only for an accepted order.
#![warn(missing_docs)]
mod args;
mod market;
mod placer;
mod record;
mod store;
mod submitter;

use crate::args::Args;
use crate::placer::OrderPlacer;
use crate::record::{OrderOutcome, OrderRecord};
use crate::store::RecordStore;
use ataix_common::{Credentials, HttpExchange, Result};
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

fn run(args: &Args) -> Result<OrderRecord> {
    let exchange = HttpExchange::new(&args.base_url)?;
    let credentials = Credentials::new(&args.api_key);
    let store = RecordStore::new(&args.records_dir);

    info!(
        "Placing {} {} order for {} (discount {}%)",
        args.order_type, args.side, args.symbol, args.discount
    );
    let record = OrderPlacer::new(&exchange, &credentials, &store).place(&args.order_params());
    Ok(record)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();
    let args = Args::parse();

    let record = match run(&args) {
        Ok(record) => record,
        Err(e) => {
            error!("Order placement could not start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(market) = &record.market {
        println!("Bid: {}", market.bid);
        println!("Ask: {}", market.ask);
        println!("Price step: {}", market.price_step);
    }
    match serde_json::to_string_pretty(&record) {
        Ok(text) => println!("{}", text),
        Err(e) => error!("Failed to render record: {}", e),
    }

    if record.outcome == OrderOutcome::Accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
