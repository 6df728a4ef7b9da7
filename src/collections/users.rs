//! Identity store wiring for the User record type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::UsersClient;
use crate::model::{User, UserCreate};
use crate::store::{CollectionActor, Document};

impl Document for User {
    type Create = UserCreate;

    /// Attaches the generated id to an unvalidated creation payload.
    fn from_create(id: String, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
        }
    }
}

/// Creates a new users collection and its client.
pub fn new() -> (CollectionActor<User>, UsersClient) {
    let user_id_counter = Arc::new(AtomicU64::new(1));
    let next_user_id = move || {
        let id = user_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("user_{}", id)
    };

    let (actor, generic_client) = CollectionActor::new(32, next_user_id);
    let client = UsersClient::new(generic_client);

    (actor, client)
}
