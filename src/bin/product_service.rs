//! The catalog service process. Serves the products collection on port 8081.

use std::sync::Arc;

use microshop::metrics::RequestMetrics;
use microshop::runtime::{serve, setup_tracing};
use microshop::{collections, services};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    info!("Starting product service");

    let (actor, products) = collections::products::new();
    tokio::spawn(actor.run());

    let metrics = Arc::new(RequestMetrics::new("product-service"));
    let app = services::products::app(products, metrics);

    serve(app, services::products::PORT).await
}
