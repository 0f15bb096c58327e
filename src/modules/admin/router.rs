use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{list_categories, list_users};

/// Admin-section views, mounted behind the admin guard.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/users", get(list_users))
}
