use serde::{Deserialize, Serialize};

/// Represents a sellable item in the catalog store.
///
/// # Document Store
/// This struct implements the [`Document`](crate::store::Document) trait,
/// allowing it to be stored in a [`CollectionActor`](crate::store::CollectionActor).
/// The trait impl lives in [`crate::collections::products`].
///
/// `stock` is persisted and echoed back but never read or written by any
/// flow; the order path does not reserve or decrement it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Payload for creating a new product.
///
/// Absent fields deserialize to their empty defaults, so a product created
/// without a price is stored with price 0 and contributes nothing to order
/// totals.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}
