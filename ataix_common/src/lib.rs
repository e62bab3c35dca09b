//!
//! Common types and utilities shared by the ATAIX command-line tools.
//!
//! This crate aggregates:
//! - `error` — unified error type `ExchangeError` used across the workspace.
//! - `result` — handy `Result<T, ExchangeError>` alias.
//! - `net` — base URL, endpoint paths and pair formatting helpers.
//! - `config` — credentials passed explicitly to authenticated calls.
//! - `model` — typed records for exchange responses and order requests.
//! - `api` — the `ExchangeApi` trait and its blocking HTTP implementation.
//! - `pricing` — the discounted limit price calculator.
//! - `testing` — scripted in-memory exchange (`test-support` feature).
#![warn(missing_docs)]
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod net;
pub mod pricing;
pub mod result;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use api::{ExchangeApi, HttpExchange};
pub use config::Credentials;
pub use error::ExchangeError;
pub use result::Result;
