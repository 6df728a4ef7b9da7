use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::clients::CatalogError;
use crate::store::StoreError;

/// Failures a request handler can hit.
///
/// Every variant collapses to a generic 500 at the HTTP boundary; the
/// concrete cause is logged server-side only and never reaches the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// The upstream catalog fetch failed.
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// The document collection could not serve the request.
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}
