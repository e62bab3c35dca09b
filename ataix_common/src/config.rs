//! Credentials for authenticated endpoints.
//!
//! The key is handed to each call that needs it; nothing in the workspace keeps it in
//! global state. `Debug` output is redacted so the key never ends up in logs.
use std::fmt;

/// API key used for the `X-API-Key` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Wrap a raw API key. Surrounding whitespace and quotes are stripped.
    pub fn new(api_key: &str) -> Self {
        let trimmed = api_key.trim();
        let no_quotes = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        Credentials {
            api_key: String::from(no_quotes),
        }
    }

    /// Raw key for the request header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .finish()
    }
}
