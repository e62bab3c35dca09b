//! Order placement flow: snapshot, price, submit, record.
//!
//! With a non-zero discount the limit price of a limit order is derived from the current
//! bid and the pair's price step; with a zero discount the caller's price goes out
//! unchanged. Market orders never carry a price, so the discount is ignored for them.
//! Anything that fails before submission is still written to the record store.
use crate::market::fetch_snapshot;
use crate::record::OrderRecord;
use crate::store::RecordStore;
use crate::submitter::OrderSubmitter;
use ataix_common::model::market::MarketSnapshot;
use ataix_common::model::order::{OrderRequest, OrderType, Side, TimeInForce};
use ataix_common::pricing::discounted_price;
use ataix_common::{Credentials, ExchangeApi, ExchangeError, Result};
use log::{info, warn};
use rust_decimal::Decimal;

/// What the caller asked for.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Decimal,
    /// Used as-is when `discount` is zero.
    pub price: Option<Decimal>,
    /// Percent below the current bid, `[0, 100)`.
    pub discount: Decimal,
    pub time_in_force: TimeInForce,
}

/// Turn caller parameters and market data into an order body.
pub fn build_request(params: &OrderParams, snapshot: &MarketSnapshot) -> Result<OrderRequest> {
    let price = if params.order_type == OrderType::Market {
        if !params.discount.is_zero() {
            warn!(
                "{}: discount {}% ignored for a market order",
                params.symbol, params.discount
            );
        }
        None
    } else if params.discount.is_zero() {
        params.price
    } else {
        let price = discounted_price(snapshot.bid, params.discount, snapshot.price_step)?;
        info!(
            "{}: price {} is {}% below bid {} (step {})",
            params.symbol, price, params.discount, snapshot.bid, snapshot.price_step
        );
        Some(price)
    };

    if params.quantity < snapshot.min_trade_size {
        warn!(
            "{}: quantity {} is below the minimum trade size {}",
            params.symbol, params.quantity, snapshot.min_trade_size
        );
    }

    OrderRequest::new(
        &params.symbol,
        params.side,
        params.order_type,
        params.quantity,
        price,
        params.time_in_force,
    )
}

/// Runs the whole placement flow against an [`ExchangeApi`].
pub struct OrderPlacer<'a, A: ExchangeApi> {
    api: &'a A,
    submitter: OrderSubmitter<'a, A>,
}

impl<'a, A: ExchangeApi> OrderPlacer<'a, A> {
    pub fn new(api: &'a A, credentials: &'a Credentials, store: &'a RecordStore) -> Self {
        Self {
            api,
            submitter: OrderSubmitter::new(api, credentials, store),
        }
    }

    /// Place one order. Always returns a record, and that record is always persisted.
    pub fn place(&self, params: &OrderParams) -> OrderRecord {
        let snapshot = match fetch_snapshot(self.api, &params.symbol) {
            Ok(snapshot) => snapshot,
            Err(e) => return self.abort(&params.symbol, e, None),
        };
        match build_request(params, &snapshot) {
            Ok(request) => self.submitter.submit(request, snapshot),
            Err(e) => self.abort(&params.symbol, e, Some(snapshot)),
        }
    }

    fn abort(&self, symbol: &str, err: ExchangeError, market: Option<MarketSnapshot>) -> OrderRecord {
        warn!("{}: order not submitted: {}", symbol, err);
        let record = OrderRecord::from_error(symbol, None, &err, market);
        self.submitter.persist(&record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ataix_common::testing::{FakeExchange, SubmitReply};
    use crate::record::OrderOutcome;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn params(discount: Decimal, price: Option<Decimal>) -> OrderParams {
        OrderParams {
            symbol: String::from("ETH/USDT"),
            side: Side::Buy,
            order_type: OrderType::Limit,
            quantity: dec!(0.00001),
            price,
            discount,
            time_in_force: TimeInForce::Gtc,
        }
    }

    fn snapshot(bid: Decimal, step: Decimal) -> MarketSnapshot {
        MarketSnapshot {
            symbol: String::from("ETH/USDT"),
            bid,
            ask: bid + dec!(1),
            last_price: bid,
            min_trade_size: dec!(0.00001),
            price_step: step,
        }
    }

    fn record_files(dir: &Path) -> Vec<String> {
        match fs::read_dir(dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn eth_listing(bid: &str, precision: &str) -> serde_json::Value {
        json!([
            {"symbol": "BTC/USDT", "bid": "60000", "pricePrecision": 2},
            {"symbol": "ETH/USDT", "bid": bid, "ask": "3001", "price": "3000.5",
             "minTradeSize": "0.00001", "pricePrecision": precision}
        ])
    }

    #[test]
    fn discount_derives_price_from_bid() {
        let request = build_request(&params(dec!(8), None), &snapshot(dec!(3000), dec!(0.01))).unwrap();
        assert_eq!(request.price.unwrap().to_string(), "2760.00000000");
    }

    #[test]
    fn zero_discount_keeps_caller_price() {
        let request = build_request(
            &params(Decimal::ZERO, Some(dec!(2999.123456))),
            &snapshot(dec!(3000), dec!(0.01)),
        )
        .unwrap();
        assert_eq!(request.price, Some(dec!(2999.123456)));
        assert_eq!(request.price.unwrap().to_string(), "2999.123456");
    }

    #[test]
    fn market_order_skips_pricing_even_with_discount() {
        let mut wanted = params(dec!(8), Some(dec!(2999)));
        wanted.order_type = OrderType::Market;
        let request = build_request(&wanted, &snapshot(Decimal::ZERO, Decimal::ZERO)).unwrap();
        assert_eq!(request.order_type, OrderType::Market);
        assert!(request.price.is_none());
    }

    #[test]
    fn non_positive_bid_is_invalid_market_data() {
        let err = build_request(&params(dec!(8), None), &snapshot(Decimal::ZERO, dec!(0.01))).unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidMarketData(_)));
    }

    #[test]
    fn non_positive_step_is_invalid_precision() {
        let err = build_request(&params(dec!(8), None), &snapshot(dec!(3000), Decimal::ZERO)).unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidPrecision(_)));
    }

    #[test]
    fn accepted_order_is_persisted_as_success() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": true, "result": {"orderID": "abc"}})));

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::Accepted);
        let market = record.market.as_ref().unwrap();
        assert_eq!(market.bid, dec!(3000));
        assert_eq!(market.price_step, dec!(0.01));
        let submitted = api.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].price.unwrap().to_string(), "2760.00000000");

        let files = record_files(tmp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("order_success_ETH_USDT_"));
        let text = fs::read_to_string(tmp.path().join(&files[0])).unwrap();
        assert!(text.contains("\"orderID\": \"abc\""));
        assert!(text.contains("\"price\": \"2760.00000000\""));
        assert!(text.contains("\"priceStep\": \"0.01\""));
    }

    #[test]
    fn exchange_rejection_is_order_failed_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": false, "message": "Insufficient balance"})));

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::Rejected);
        assert!(!record.status);
        let files = record_files(tmp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("order_failed_"));
        assert!(!files[0].starts_with("error_"));
    }

    #[test]
    fn transport_failure_is_persisted_as_error_with_request() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "2"))
            .with_submit_reply(SubmitReply::Down);

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::TransportFailed);
        assert!(record.response.is_none());
        assert!(record.error.is_some());
        assert_eq!(record.request.as_ref().unwrap().symbol, "ETH/USDT");
        assert_eq!(record.market.as_ref().unwrap().bid, dec!(3000));
        let files = record_files(tmp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("error_ETH_USDT_"));
    }

    #[test]
    fn zero_bid_aborts_without_submission() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("0.0000000000", "2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": true})));

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::Aborted);
        assert!(api.submitted.borrow().is_empty());
        assert_eq!(record.market.as_ref().unwrap().bid, Decimal::ZERO);
        let files = record_files(tmp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("aborted_ETH_USDT_"));
    }

    #[test]
    fn unknown_symbol_aborts_without_submission() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": true})));
        let mut wanted = params(dec!(8), None);
        wanted.symbol = String::from("SOL/USDT");

        let record = OrderPlacer::new(&api, &creds, &store).place(&wanted);

        assert_eq!(record.outcome, OrderOutcome::Aborted);
        assert!(record.error.as_ref().unwrap().contains("SOL/USDT"));
        assert!(api.submitted.borrow().is_empty());
    }

    #[test]
    fn bad_precision_aborts_without_submission() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "-2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": true})));

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::Aborted);
        assert!(record.error.as_ref().unwrap().contains("precision"));
        assert!(api.submitted.borrow().is_empty());
    }

    #[test]
    fn unreachable_listing_is_persisted_as_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = RecordStore::new(tmp.path());
        let creds = Credentials::new("key");
        let api = FakeExchange::offline();

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::TransportFailed);
        assert!(record.request.is_none());
        assert!(api.submitted.borrow().is_empty());
        assert!(record_files(tmp.path())[0].starts_with("error_"));
    }

    #[test]
    fn unwritable_store_still_returns_record() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();
        let store = RecordStore::new(&blocker);
        let creds = Credentials::new("key");
        let api = FakeExchange::with_listing(eth_listing("3000", "2"))
            .with_submit_reply(SubmitReply::Json(json!({"status": true})));

        let record = OrderPlacer::new(&api, &creds, &store).place(&params(dec!(8), None));

        assert_eq!(record.outcome, OrderOutcome::Accepted);
        assert_eq!(api.submitted.borrow().len(), 1);
    }
}
