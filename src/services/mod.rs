//! The HTTP surface: one router per service process.
//!
//! Each service exposes the same shell (liveness text at `/`, Prometheus
//! text at `/metrics`, permissive CORS so the browser storefront can fan
//! out across origins) around its two `/api/*` routes. Ports are fixed per
//! service and not configurable.

pub mod orders;
pub mod products;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::metrics::{track_requests, RequestMetrics};

/// Wraps a service router with the layers every process shares.
fn with_service_layers(router: Router, metrics: Arc<RequestMetrics>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    router
        .layer(cors)
        .layer(middleware::from_fn_with_state(metrics, track_requests))
}
