//! The order service process. Serves the orders collection and the order
//! flow on port 8082. Needs the catalog service's base URL, taken from
//! `PRODUCT_SERVICE_URL` with an in-cluster default.

use std::sync::Arc;

use microshop::clients::CatalogClient;
use microshop::config::OrderConfig;
use microshop::metrics::RequestMetrics;
use microshop::runtime::{serve, setup_tracing};
use microshop::{collections, services};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    info!("Starting order service");

    let config = OrderConfig::load();
    info!(catalog = %config.product_service_url, "Using catalog service");

    let (actor, orders) = collections::orders::new();
    tokio::spawn(actor.run());

    let catalog = CatalogClient::new(reqwest::Client::new(), config.product_service_url);
    let metrics = Arc::new(RequestMetrics::new("order-service"));
    let app = services::orders::app(orders, catalog, metrics);

    serve(app, services::orders::PORT).await
}
