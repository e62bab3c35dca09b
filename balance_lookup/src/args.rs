//! Command-line arguments for the balance lookup.
use ataix_common::net::BASE_URL;
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Print the available ATAIX balance of one asset", long_about = None)]
pub struct Args {
    /// Asset code, e.g. USDT.
    #[clap(long, default_value = "USDT")]
    pub asset: String,

    /// API key sent as X-API-Key.
    #[clap(long, env = "ATAIX_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Exchange REST base URL.
    #[clap(long, env = "ATAIX_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
}
