use crate::clients::collection::CollectionHandle;
use crate::model::{Product, ProductCreate};
use crate::store::{CollectionClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the catalog store's products collection.
#[derive(Clone)]
pub struct ProductsClient {
    inner: CollectionClient<Product>,
}

impl ProductsClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }

    /// Persists an unvalidated product payload and returns the stored record.
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, StoreError> {
        debug!(?params, "create_product called");
        self.inner.insert(params).await
    }
}

#[async_trait]
impl CollectionHandle<Product> for ProductsClient {
    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }
}
