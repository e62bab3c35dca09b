//! In-memory `ExchangeApi` for tests.
//!
//! Enabled for this crate's own tests and, through the `test-support` feature, for the
//! binaries' dev-dependencies. Every call is recorded so tests can assert which
//! requests were (or were not) made.
use std::cell::RefCell;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::api::ExchangeApi;
use crate::config::Credentials;
use crate::error::ExchangeError;
use crate::model::market::{OrderBookDepth, SymbolInfo};
use crate::model::order::OrderRequest;
use crate::result::Result;

/// Canned answer of the balance endpoint.
#[derive(Debug, Clone)]
pub enum BalanceReply {
    /// `result.available` is present.
    Available(Decimal),
    /// HTTP 401/403.
    Rejected,
    /// Body without a usable `available`.
    Malformed,
}

/// Canned answer of the order endpoint.
#[derive(Debug, Clone)]
pub enum SubmitReply {
    /// The exchange answers with this body.
    Json(Value),
    /// The connection fails.
    Down,
}

/// Scripted exchange. `listing: None` simulates an unreachable host.
pub struct FakeExchange {
    listing: Option<Value>,
    depth: Option<Value>,
    balance: BalanceReply,
    submit: SubmitReply,
    /// Pairs passed to `depth`.
    pub depth_queries: RefCell<Vec<String>>,
    /// Assets passed to `balance`.
    pub balance_requests: RefCell<Vec<String>>,
    /// Orders passed to `submit_order` that reached the "exchange".
    pub submitted: RefCell<Vec<OrderRequest>>,
}

impl FakeExchange {
    /// Exchange listing `listing` (a JSON array of symbol entries). Depth is
    /// unavailable, balances are malformed and order submission fails until configured.
    pub fn with_listing(listing: Value) -> Self {
        FakeExchange {
            listing: Some(listing),
            depth: None,
            balance: BalanceReply::Malformed,
            submit: SubmitReply::Down,
            depth_queries: RefCell::new(Vec::new()),
            balance_requests: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    /// Every call fails at the transport level.
    pub fn offline() -> Self {
        FakeExchange {
            listing: None,
            ..FakeExchange::with_listing(Value::Null)
        }
    }

    /// Answer depth queries with `body` (`{"bids": [...], "asks": [...]}`).
    pub fn with_depth(mut self, body: Value) -> Self {
        self.depth = Some(body);
        self
    }

    /// Answer balance requests with `reply`.
    pub fn with_balance(mut self, reply: BalanceReply) -> Self {
        self.balance = reply;
        self
    }

    /// Answer order submissions with `reply`.
    pub fn with_submit_reply(mut self, reply: SubmitReply) -> Self {
        self.submit = reply;
        self
    }

    fn unreachable() -> ExchangeError {
        ExchangeError::Transport(String::from("connection refused"))
    }
}

impl ExchangeApi for FakeExchange {
    fn symbols(&self) -> Result<Vec<SymbolInfo>> {
        match &self.listing {
            Some(listing) => Ok(serde_json::from_value(listing.clone())?),
            None => Err(Self::unreachable()),
        }
    }

    fn depth(&self, pair: &str) -> Result<OrderBookDepth> {
        self.depth_queries.borrow_mut().push(String::from(pair));
        if self.listing.is_none() {
            return Err(Self::unreachable());
        }
        match &self.depth {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(ExchangeError::Unavailable(format!("depth for {}", pair))),
        }
    }

    fn balance(&self, asset: &str, _credentials: &Credentials) -> Result<Decimal> {
        self.balance_requests.borrow_mut().push(String::from(asset));
        if self.listing.is_none() {
            return Err(Self::unreachable());
        }
        match &self.balance {
            BalanceReply::Available(amount) => Ok(*amount),
            BalanceReply::Rejected => Err(ExchangeError::Auth(String::from("HTTP 401"))),
            BalanceReply::Malformed => Err(ExchangeError::Unavailable(format!(
                "malformed balance response for {}",
                asset
            ))),
        }
    }

    fn submit_order(&self, order: &OrderRequest, _credentials: &Credentials) -> Result<Value> {
        match &self.submit {
            SubmitReply::Json(body) => {
                self.submitted.borrow_mut().push(order.clone());
                Ok(body.clone())
            }
            SubmitReply::Down => Err(ExchangeError::Transport(String::from("connection reset"))),
        }
    }
}
