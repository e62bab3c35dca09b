//! Endpoint constants and small URL helpers for the ATAIX REST API.

/// Production base URL.
pub const BASE_URL: &str = "https://api.ataix.kz";
/// Symbol listing (public).
pub const SYMBOLS_PATH: &str = "/api/symbols";
/// Order book depth (public).
pub const DEPTH_PATH: &str = "/api/depth";
/// Balance of a single asset; the asset code is appended.
pub const BALANCES_PATH: &str = "/api/user/balances";
/// Order submission.
pub const ORDERS_PATH: &str = "/api/orders";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Join a base URL and an absolute path without doubling the slash.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Convert `BASE/QUOTE` into the `BASE_QUOTE` form the depth endpoint expects.
pub fn depth_symbol(symbol: &str) -> String {
    symbol.replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slash() {
        assert_eq!(url("https://api.ataix.kz/", SYMBOLS_PATH), "https://api.ataix.kz/api/symbols");
        assert_eq!(url(BASE_URL, ORDERS_PATH), "https://api.ataix.kz/api/orders");
    }

    #[test]
    fn depth_symbol_replaces_separator() {
        assert_eq!(depth_symbol("ETH/USDT"), "ETH_USDT");
        assert_eq!(depth_symbol("BTCUSDT"), "BTCUSDT");
    }
}
