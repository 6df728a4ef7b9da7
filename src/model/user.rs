use serde::{Deserialize, Serialize};

/// Represents an account record in the identity store.
///
/// # Document Store
/// This struct implements the [`Document`](crate::store::Document) trait,
/// allowing it to be stored in a [`CollectionActor`](crate::store::CollectionActor).
/// The trait impl lives in [`crate::collections::users`].
///
/// No relationship to any other entity is enforced; orders reference users
/// by free-text id without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
///
/// The store is schema-loose: absent fields deserialize to their empty
/// defaults rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}
