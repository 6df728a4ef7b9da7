//! The catalog service: pass-through CRUD over the products collection.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::clients::{CollectionHandle, ProductsClient};
use crate::error::AppError;
use crate::metrics::{metrics_handler, RequestMetrics};
use crate::model::{Product, ProductCreate};

pub const PORT: u16 = 8081;

#[derive(Clone)]
pub struct ProductsState {
    pub products: ProductsClient,
    pub metrics: Arc<RequestMetrics>,
}

impl FromRef<ProductsState> for Arc<RequestMetrics> {
    fn from_ref(state: &ProductsState) -> Self {
        state.metrics.clone()
    }
}

/// Builds the catalog service router.
pub fn app(products: ProductsClient, metrics: Arc<RequestMetrics>) -> Router {
    let state = ProductsState {
        products,
        metrics: metrics.clone(),
    };

    let router = Router::new()
        .route("/", get(liveness))
        .route("/metrics", get(metrics_handler))
        .route("/api/products", get(list_products).post(create_product))
        .with_state(state);

    super::with_service_layers(router, metrics)
}

async fn liveness() -> &'static str {
    "Product Service Running"
}

async fn list_products(State(state): State<ProductsState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

#[derive(Serialize)]
struct CreateProductResponse {
    message: &'static str,
    product: Product,
}

async fn create_product(
    State(state): State<ProductsState>,
    Json(params): Json<ProductCreate>,
) -> Result<Json<CreateProductResponse>, AppError> {
    let product = state.products.create_product(params).await?;
    info!(product_id = %product.id, "Product added");
    Ok(Json(CreateProductResponse {
        message: "Product added",
        product,
    }))
}
