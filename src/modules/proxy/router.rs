use axum::{Router, routing::any};

use crate::state::AppState;

use super::controller::forward_api;

/// Catch-all passthrough, mounted under `/api`.
pub fn init_proxy_router() -> Router<AppState> {
    Router::new().route("/{*path}", any(forward_api))
}
