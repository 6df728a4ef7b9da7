use crate::clients::collection::CollectionHandle;
use crate::model::{Order, OrderCreate};
use crate::store::{CollectionClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the order store's orders collection.
///
/// Pricing happens in the order flow before this client is called; the
/// payload carries the already-computed total.
#[derive(Clone)]
pub struct OrdersClient {
    inner: CollectionClient<Order>,
}

impl OrdersClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists a priced order and returns the stored record.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, StoreError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to collection");
        self.inner.insert(params).await
    }
}

#[async_trait]
impl CollectionHandle<Order> for OrdersClient {
    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }
}
