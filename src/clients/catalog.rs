use crate::model::Product;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors from the outbound catalog fetch.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed in transport or the catalog answered non-2xx.
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client for the Catalog Store service.
///
/// The order flow fetches the **entire** catalog on every order: no
/// timeout, no retry, no circuit breaker. A stalled catalog blocks that
/// request indefinitely but not other concurrent requests.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches every product currently in the catalog.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(base_url = %self.base_url, "Fetching full catalog");
        let url = format!("{}/api/products", self.base_url);
        let products = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Product>>()
            .await?;
        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}
