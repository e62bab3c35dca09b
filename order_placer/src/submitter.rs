//! Order submission and unconditional persistence of the result.
use crate::record::OrderRecord;
use crate::store::RecordStore;
use ataix_common::model::market::MarketSnapshot;
use ataix_common::model::order::OrderRequest;
use ataix_common::{Credentials, ExchangeApi};
use log::{error, info, warn};

/// Sends an order and records the attempt, whatever happens.
pub struct OrderSubmitter<'a, A: ExchangeApi> {
    api: &'a A,
    credentials: &'a Credentials,
    store: &'a RecordStore,
}

impl<'a, A: ExchangeApi> OrderSubmitter<'a, A> {
    pub fn new(api: &'a A, credentials: &'a Credentials, store: &'a RecordStore) -> Self {
        Self {
            api,
            credentials,
            store,
        }
    }

    /// Submit `request` and return the persisted record. `market` is the snapshot the
    /// request was built from; it is kept on the record whatever the outcome.
    pub fn submit(&self, request: OrderRequest, market: MarketSnapshot) -> OrderRecord {
        info!(
            "Submitting {} {} {} qty={} price={}",
            request.order_type,
            request.side,
            request.symbol,
            request.quantity,
            request
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| String::from("market"))
        );
        let record = match self.api.submit_order(&request, self.credentials) {
            Ok(response) => OrderRecord::from_response(request, response, market),
            Err(e) => {
                error!("Order for {} did not reach the exchange: {}", request.symbol, e);
                let symbol = request.symbol.clone();
                OrderRecord::from_error(&symbol, Some(request), &e, Some(market))
            }
        };
        if !record.status {
            warn!("Order for {} ended as {:?}", record.symbol, record.outcome);
        }
        self.persist(&record);
        record
    }

    /// Write `record` to the store; a write failure is logged, never returned.
    pub fn persist(&self, record: &OrderRecord) {
        match self.store.save(record) {
            Ok(path) => info!("Record saved to {}", path.display()),
            Err(e) => error!("Failed to save record {}: {}", record.file_name(), e),
        }
    }
}
