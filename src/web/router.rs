//! Router configuration for the client endpoint.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{client_request, fallback, health, AppState};
use crate::db::{AccountStore, StatusStore};

/// Path the client posts every request to.
pub const LOGIN_PATH: &str = "/login.php";

/// Create the main router.
///
/// Unknown paths and methods get an empty `200 OK`, so the client never sees
/// an error page.
pub fn create_router<S: AccountStore + StatusStore>(app_state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            LOGIN_PATH,
            post(client_request::<S>).fallback(fallback),
        )
        .merge(create_health_router())
        .fallback(fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router<T: Clone + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/health", get(health).fallback(fallback))
}
