//! The identity service process. Serves the users collection on port 8080.

use std::sync::Arc;

use microshop::metrics::RequestMetrics;
use microshop::runtime::{serve, setup_tracing};
use microshop::{collections, services};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    info!("Starting user service");

    let (actor, users) = collections::users::new();
    tokio::spawn(actor.run());

    let metrics = Arc::new(RequestMetrics::new("user-service"));
    let app = services::users::app(users, metrics);

    serve(app, services::users::PORT).await
}
