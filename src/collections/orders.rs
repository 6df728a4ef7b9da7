//! Order store wiring for the Order record type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::OrdersClient;
use crate::model::{Order, OrderCreate, DEFAULT_STATUS};
use crate::store::{CollectionActor, Document};

impl Document for Order {
    type Create = OrderCreate;

    /// Attaches the generated id and the fixed default status. The total
    /// was computed by the order flow before the insert; nothing here
    /// recomputes it.
    fn from_create(id: String, params: OrderCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            product_ids: params.product_ids,
            total: params.total,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Creates a new orders collection and its client.
pub fn new() -> (CollectionActor<Order>, OrdersClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || {
        let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    };

    let (actor, generic_client) = CollectionActor::new(32, next_order_id);
    let client = OrdersClient::new(generic_client);

    (actor, client)
}
