use serde::{Deserialize, Serialize};

/// Status assigned to every order at creation. Orders have no lifecycle;
/// the status never transitions.
pub const DEFAULT_STATUS: &str = "Created";

/// Represents a priced, persisted order.
///
/// # Document Store
/// This struct implements the [`Document`](crate::store::Document) trait,
/// allowing it to be stored in a [`CollectionActor`](crate::store::CollectionActor).
/// The trait impl lives in [`crate::collections::orders`].
///
/// `user_id` and `product_ids` are opaque references, stored verbatim and
/// never validated for existence. Duplicates in `product_ids` are kept.
/// `total` is fixed at creation time and never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub total: f64,
    pub status: String,
}

/// Payload for persisting a new order, with the total already computed by
/// the order flow.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub total: f64,
}

/// The inbound order request: who is ordering and which catalog ids.
///
/// Both fields default when absent, so a bare `{}` prices to an empty order
/// rather than faulting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub user_id: String,
    pub product_ids: Vec<String>,
}
