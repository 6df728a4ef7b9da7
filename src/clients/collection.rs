use crate::store::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// This trait reduces boilerplate by providing a default implementation
/// for the operation every collection exposes the same way: `list`.
#[async_trait]
pub trait CollectionHandle<T: Document>: Send + Sync {
    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Fetch every record, in store-native (insertion) order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }
}
