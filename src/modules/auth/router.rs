use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::session_view;

pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/session", get(session_view))
}
