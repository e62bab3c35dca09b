//! Command-line arguments for the bid lookup.
use ataix_common::net::BASE_URL;
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Print the best bid for an ATAIX trading pair", long_about = None)]
pub struct Args {
    /// Trading pair in BASE/QUOTE form (case-sensitive).
    #[clap(long, default_value = "ETH/USDT")]
    pub symbol: String,

    /// Exchange REST base URL.
    #[clap(long, env = "ATAIX_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
}
