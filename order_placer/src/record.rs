//! Audit record written for every order attempt.
//!
//! Success and failure share one shape: the exchange reply (or the error text), the
//! echoed request, an optional market snapshot and a timestamp. `OrderOutcome`
//! decides the file prefix, so "the exchange rejected the order" (`order_failed`)
//! never looks like "the request never reached the exchange" (`error`).
use ataix_common::ExchangeError;
use ataix_common::model::market::MarketSnapshot;
use ataix_common::model::order::OrderRequest;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// How an order attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderOutcome {
    /// Exchange answered with `status: true`.
    Accepted,
    /// Exchange answered, but not with `status: true`.
    Rejected,
    /// Network or decoding failure; the exchange never gave a usable answer.
    TransportFailed,
    /// Stopped locally before submission (unknown symbol, bad market data, ...).
    Aborted,
}

impl OrderOutcome {
    /// File name prefix for records with this outcome.
    pub fn prefix(&self) -> &'static str {
        match self {
            OrderOutcome::Accepted => "order_success",
            OrderOutcome::Rejected => "order_failed",
            OrderOutcome::TransportFailed => "error",
            OrderOutcome::Aborted => "aborted",
        }
    }
}

/// Write-once result of one order attempt.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    /// Exchange-reported status; `false` for anything that did not reach it.
    pub status: bool,
    pub outcome: OrderOutcome,
    pub symbol: String,
    /// Raw exchange reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// Error description when there is no reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Echo of the submitted body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<OrderRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSnapshot>,
    pub timestamp: DateTime<Local>,
}

impl OrderRecord {
    /// Record for a reply that came back from the exchange, whatever it says.
    /// `market` is the snapshot the order was priced from.
    pub fn from_response(request: OrderRequest, response: Value, market: MarketSnapshot) -> Self {
        let status = response
            .get("status")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        OrderRecord {
            status,
            outcome: if status {
                OrderOutcome::Accepted
            } else {
                OrderOutcome::Rejected
            },
            symbol: request.symbol.clone(),
            response: Some(response),
            error: None,
            request: Some(request),
            market: Some(market),
            timestamp: Local::now(),
        }
    }

    /// Record for an attempt that produced no exchange reply.
    pub fn from_error(
        symbol: &str,
        request: Option<OrderRequest>,
        error: &ExchangeError,
        market: Option<MarketSnapshot>,
    ) -> Self {
        OrderRecord {
            status: false,
            outcome: if error.is_transport() {
                OrderOutcome::TransportFailed
            } else {
                OrderOutcome::Aborted
            },
            symbol: String::from(symbol),
            response: None,
            error: Some(error.to_string()),
            request,
            market,
            timestamp: Local::now(),
        }
    }

    /// `<prefix>_<BASE_QUOTE>_<YYYYMMDD_HHMMSS>.json`
    pub fn file_name(&self) -> String {
        let symbol: String = self
            .symbol
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!(
            "{}_{}_{}.json",
            self.outcome.prefix(),
            symbol,
            self.timestamp.format("%Y%m%d_%H%M%S")
        )
    }
}
