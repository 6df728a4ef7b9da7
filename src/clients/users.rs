use crate::clients::collection::CollectionHandle;
use crate::model::{User, UserCreate};
use crate::store::{CollectionClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the identity store's users collection.
#[derive(Clone)]
pub struct UsersClient {
    inner: CollectionClient<User>,
}

impl UsersClient {
    pub fn new(inner: CollectionClient<User>) -> Self {
        Self { inner }
    }

    /// Persists an unvalidated user payload and returns the stored record.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, StoreError> {
        debug!(?params, "create_user called");
        self.inner.insert(params).await
    }
}

#[async_trait]
impl CollectionHandle<User> for UsersClient {
    fn inner(&self) -> &CollectionClient<User> {
        &self.inner
    }
}
