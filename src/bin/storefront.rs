//! The presentation layer: fetches the three collections concurrently and
//! dumps them as JSON.
//!
//! Each fetch fails soft — an unreachable service shows up as an empty
//! collection, not a fatal error. Only failing to construct the HTTP
//! client at all is treated as a single fatal error state.

use microshop::config::StorefrontConfig;
use microshop::model::{Order, Product, User};
use microshop::runtime::setup_tracing;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::load();

    let http = reqwest::Client::builder().build().map_err(|e| {
        error!(error = %e, "Failed to reach one or more services");
        e.to_string()
    })?;

    info!("Fetching collections");

    let (products, users, orders) = tokio::join!(
        fetch_collection::<Product>(&http, &config.product_service_url, "/api/products"),
        fetch_collection::<User>(&http, &config.user_service_url, "/api/users"),
        fetch_collection::<Order>(&http, &config.order_service_url, "/api/orders"),
    );

    print_collection("Products", or_empty(products, "products"))?;
    print_collection("Users", or_empty(users, "users"))?;
    print_collection("Orders", or_empty(orders, "orders"))?;

    Ok(())
}

async fn fetch_collection<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &str,
    path: &str,
) -> Result<Vec<T>, reqwest::Error> {
    http.get(format!("{base_url}{path}"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

fn or_empty<T>(result: Result<Vec<T>, reqwest::Error>, resource: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(resource, error = %e, "Fetch failed, showing empty collection");
        Vec::new()
    })
}

fn print_collection<T: Serialize>(title: &str, records: Vec<T>) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
    println!("{title}\n{rendered}\n");
    Ok(())
}
