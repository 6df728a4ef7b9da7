//! The identity service: pass-through CRUD over the users collection.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::clients::{CollectionHandle, UsersClient};
use crate::error::AppError;
use crate::metrics::{metrics_handler, RequestMetrics};
use crate::model::{User, UserCreate};

pub const PORT: u16 = 8080;

#[derive(Clone)]
pub struct UsersState {
    pub users: UsersClient,
    pub metrics: Arc<RequestMetrics>,
}

impl FromRef<UsersState> for Arc<RequestMetrics> {
    fn from_ref(state: &UsersState) -> Self {
        state.metrics.clone()
    }
}

/// Builds the identity service router.
pub fn app(users: UsersClient, metrics: Arc<RequestMetrics>) -> Router {
    let state = UsersState {
        users,
        metrics: metrics.clone(),
    };

    let router = Router::new()
        .route("/", get(liveness))
        .route("/metrics", get(metrics_handler))
        .route("/api/users", get(list_users).post(create_user))
        .with_state(state);

    super::with_service_layers(router, metrics)
}

async fn liveness() -> &'static str {
    "User Service Running"
}

async fn list_users(State(state): State<UsersState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

#[derive(Serialize)]
struct CreateUserResponse {
    message: &'static str,
    user: User,
}

async fn create_user(
    State(state): State<UsersState>,
    Json(params): Json<UserCreate>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let user = state.users.create_user(params).await?;
    info!(user_id = %user.id, "User created");
    Ok(Json(CreateUserResponse {
        message: "User created",
        user,
    }))
}
