use std::env;

use tracing::info;

/// Default in-cluster address of the catalog service.
const DEFAULT_PRODUCT_SERVICE_URL: &str = "http://product-service:8081";

/// Environment configuration for the order service.
///
/// Only the catalog base URL is configurable; listen ports are fixed per
/// service.
pub struct OrderConfig {
    pub product_service_url: String,
}

impl OrderConfig {
    pub fn load() -> Self {
        Self {
            product_service_url: env_or("PRODUCT_SERVICE_URL", DEFAULT_PRODUCT_SERVICE_URL),
        }
    }
}

/// Environment configuration for the storefront client.
pub struct StorefrontConfig {
    pub user_service_url: String,
    pub product_service_url: String,
    pub order_service_url: String,
}

impl StorefrontConfig {
    pub fn load() -> Self {
        Self {
            user_service_url: env_or("USER_SERVICE_URL", "http://localhost:8080"),
            product_service_url: env_or("PRODUCT_SERVICE_URL", "http://localhost:8081"),
            order_service_url: env_or("ORDER_SERVICE_URL", "http://localhost:8082"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
