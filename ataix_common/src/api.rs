//! The exchange as an external collaborator.
//!
//! `ExchangeApi` is the seam every flow is written against; `HttpExchange` is the
//! production implementation over blocking `reqwest`. Responses are decoded into the
//! typed records from `model` right here, so an unexpected body shape surfaces as
//! `ExchangeError::Transport` instead of leaking into the flows.
use log::debug;
use reqwest::{StatusCode, Url};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::ExchangeError;
use crate::model::Envelope;
use crate::model::balance::BalanceInfo;
use crate::model::market::{OrderBookDepth, SymbolInfo};
use crate::model::order::OrderRequest;
use crate::net::{self, API_KEY_HEADER, BALANCES_PATH, DEPTH_PATH, ORDERS_PATH, SYMBOLS_PATH};
use crate::result::Result;

/// Operations the tools need from the exchange. All calls are blocking.
pub trait ExchangeApi {
    /// Full symbol listing. Fails with `Unavailable` when the exchange reports `status: false`.
    fn symbols(&self) -> Result<Vec<SymbolInfo>>;

    /// Order book depth for a pair given in `BASE_QUOTE` form.
    fn depth(&self, pair: &str) -> Result<OrderBookDepth>;

    /// Available balance of `asset`.
    fn balance(&self, asset: &str, credentials: &Credentials) -> Result<Decimal>;

    /// Submit an order and return the exchange's JSON reply untouched, whatever its
    /// `status`. Only transport and decoding failures are errors here.
    fn submit_order(&self, order: &OrderRequest, credentials: &Credentials) -> Result<Value>;
}

/// `ExchangeApi` over HTTPS.
pub struct HttpExchange {
    client: Client,
    base_url: String,
}

impl HttpExchange {
    /// Build a client for the given base URL (see [`net::BASE_URL`]).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(HttpExchange {
            client,
            base_url: String::from(base_url),
        })
    }

    fn url(&self, path: &str) -> String {
        net::url(&self.base_url, path)
    }

    /// `/api/user/balances/<ASSET>` with the asset percent-encoded as one path segment.
    fn balance_url(&self, asset: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url(BALANCES_PATH))
            .map_err(|e| ExchangeError::Transport(format!("bad base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ExchangeError::Transport(format!("base URL {} cannot carry a path", self.base_url)))?
            .push(asset);
        Ok(url)
    }

    fn api_key_header(credentials: &Credentials) -> Result<HeaderValue> {
        HeaderValue::from_str(credentials.api_key())
            .map_err(|_| ExchangeError::Auth(String::from("API key contains invalid header characters")))
    }

    /// Decode a `{status, result}` envelope, treating `status: false` as `Unavailable`.
    fn read_envelope<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let http_status = response.status();
        let envelope: Envelope<Value> = response
            .json()
            .map_err(|e| ExchangeError::Transport(format!("{} (HTTP {}): {}", what, http_status, e)))?;
        decode_envelope(envelope, what)
    }
}

impl ExchangeApi for HttpExchange {
    fn symbols(&self) -> Result<Vec<SymbolInfo>> {
        let url = self.url(SYMBOLS_PATH);
        debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        Self::read_envelope(response, "symbol listing")
    }

    fn depth(&self, pair: &str) -> Result<OrderBookDepth> {
        let url = self.url(DEPTH_PATH);
        debug!("GET {}?symbol={}", url, pair);
        let response = self.client.get(&url).query(&[("symbol", pair)]).send()?;
        Self::read_envelope(response, &format!("depth for {}", pair))
    }

    fn balance(&self, asset: &str, credentials: &Credentials) -> Result<Decimal> {
        let url = self.balance_url(asset)?;
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, Self::api_key_header(credentials)?)
            .send()?;

        let http_status = response.status();
        if http_status == StatusCode::UNAUTHORIZED || http_status == StatusCode::FORBIDDEN {
            return Err(ExchangeError::Auth(format!(
                "balance request for {} rejected (HTTP {})",
                asset, http_status
            )));
        }

        let body: Value = response.json()?;
        balance_from_body(asset, body)
    }

    fn submit_order(&self, order: &OrderRequest, credentials: &Credentials) -> Result<Value> {
        let url = self.url(ORDERS_PATH);
        debug!("POST {} {:?}", url, order);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, Self::api_key_header(credentials)?)
            .json(order)
            .send()?;
        let http_status = response.status();
        debug!("order endpoint answered HTTP {}", http_status);
        response
            .json::<Value>()
            .map_err(|e| ExchangeError::Transport(format!("order response (HTTP {}): {}", http_status, e)))
    }
}

fn decode_envelope<T: DeserializeOwned>(envelope: Envelope<Value>, what: &str) -> Result<T> {
    match envelope {
        Envelope {
            status: true,
            result: Some(result),
        } => serde_json::from_value(result)
            .map_err(|e| ExchangeError::Transport(format!("{}: unexpected shape: {}", what, e))),
        _ => Err(ExchangeError::Unavailable(format!(
            "{}: exchange reported no data",
            what
        ))),
    }
}

/// Pull `result.available` out of a balance response body.
fn balance_from_body(asset: &str, body: Value) -> Result<Decimal> {
    let malformed = || ExchangeError::Unavailable(format!("malformed balance response for {}", asset));
    let result = body.get("result").cloned().ok_or_else(malformed)?;
    let info: BalanceInfo = serde_json::from_value(result).map_err(|_| malformed())?;
    info.available.ok_or_else(malformed)
}
