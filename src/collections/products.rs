//! Catalog store wiring for the Product record type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::ProductsClient;
use crate::model::{Product, ProductCreate};
use crate::store::{CollectionActor, Document};

impl Document for Product {
    type Create = ProductCreate;

    /// Attaches the generated id to an unvalidated creation payload.
    /// A payload that arrived without a price was deserialized with
    /// price 0, so it is stored that way.
    fn from_create(id: String, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            price: params.price,
            stock: params.stock,
        }
    }
}

/// Creates a new products collection and its client.
pub fn new() -> (CollectionActor<Product>, ProductsClient) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || {
        let id = product_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("product_{}", id)
    };

    let (actor, generic_client) = CollectionActor::new(32, next_product_id);
    let client = ProductsClient::new(generic_client);

    (actor, client)
}
