//! The order service and the order flow, the one cross-service path in
//! the system.
//!
//! `createOrder` prices a request against a full catalog snapshot fetched
//! from the catalog service, then persists the order in a single write.
//! If the fetch or the write fails, nothing was persisted and the caller
//! sees a generic server error, so the operation is atomic from the
//! caller's point of view. There is no compensating action and no retry.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::clients::{CatalogClient, CollectionHandle, OrdersClient};
use crate::error::AppError;
use crate::metrics::{metrics_handler, RequestMetrics};
use crate::model::{Order, OrderCreate, OrderRequest, Product};

pub const PORT: u16 = 8082;

#[derive(Clone)]
pub struct OrdersState {
    pub orders: OrdersClient,
    pub catalog: CatalogClient,
    pub metrics: Arc<RequestMetrics>,
}

impl FromRef<OrdersState> for Arc<RequestMetrics> {
    fn from_ref(state: &OrdersState) -> Self {
        state.metrics.clone()
    }
}

/// Builds the order service router.
pub fn app(orders: OrdersClient, catalog: CatalogClient, metrics: Arc<RequestMetrics>) -> Router {
    let state = OrdersState {
        orders,
        catalog,
        metrics: metrics.clone(),
    };

    let router = Router::new()
        .route("/", get(liveness))
        .route("/metrics", get(metrics_handler))
        .route("/api/orders", get(list_orders).post(create_order))
        .with_state(state);

    super::with_service_layers(router, metrics)
}

/// Sums the price of the catalog items whose id appears in `product_ids`.
///
/// Matching is by exact string equality against the requested id set, so
/// requested ids with no catalog counterpart contribute nothing and are
/// silently dropped, and a duplicated requested id still counts its
/// product's price once. Stock is not consulted.
pub fn order_total(catalog: &[Product], product_ids: &[String]) -> f64 {
    catalog
        .iter()
        .filter(|product| product_ids.contains(&product.id))
        .map(|product| product.price)
        .sum()
}

async fn liveness() -> &'static str {
    "Order Service Running"
}

async fn list_orders(State(state): State<OrdersState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.list().await?;
    Ok(Json(orders))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderResponse {
    message: &'static str,
    total: f64,
    order_id: String,
}

async fn create_order(
    State(state): State<OrdersState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    // Full catalog snapshot; concurrent orders may each price against the
    // same snapshot, and nothing reserves stock.
    let catalog = state.catalog.fetch_products().await?;
    let total = order_total(&catalog, &request.product_ids);

    let order = state
        .orders
        .create_order(OrderCreate {
            user_id: request.user_id,
            product_ids: request.product_ids,
            total,
        })
        .await?;

    info!(order_id = %order.id, total, "Order created");
    Ok(Json(CreateOrderResponse {
        message: "Order created",
        total,
        order_id: order.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            price,
            stock: 100,
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn total_sums_exactly_the_matching_subset() {
        let catalog = vec![product("A", 10.0), product("B", 5.0), product("D", 7.5)];

        assert_eq!(order_total(&catalog, &ids(&["A", "B"])), 15.0);
        assert_eq!(order_total(&catalog, &ids(&["D"])), 7.5);
        assert_eq!(order_total(&catalog, &ids(&["A", "B", "D"])), 22.5);
    }

    #[test]
    fn unknown_ids_contribute_zero() {
        let catalog = vec![product("A", 10.0), product("B", 5.0)];

        assert_eq!(order_total(&catalog, &ids(&["A", "B", "C"])), 15.0);
        assert_eq!(order_total(&catalog, &ids(&["C", "nope"])), 0.0);
    }

    #[test]
    fn empty_request_totals_zero() {
        let catalog = vec![product("A", 10.0)];

        assert_eq!(order_total(&catalog, &[]), 0.0);
    }

    #[test]
    fn duplicate_requested_ids_count_once() {
        // Membership is catalog-side: each stored product matches at most
        // once no matter how often its id was requested.
        let catalog = vec![product("A", 10.0)];

        assert_eq!(order_total(&catalog, &ids(&["A", "A", "A"])), 10.0);
    }

    #[test]
    fn priceless_products_contribute_zero() {
        // A product created without a price was stored with price 0.
        let catalog = vec![product("A", 0.0), product("B", 5.0)];

        assert_eq!(order_total(&catalog, &ids(&["A", "B"])), 5.0);
    }
}
