use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{list_student_bookings, list_tutor_bookings, preview_booking};

/// Student-section booking routes, mounted behind the student guard.
pub fn init_student_bookings_router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_student_bookings))
        .route("/bookings/preview", post(preview_booking))
}

/// Tutor-section booking routes, mounted behind the tutor guard.
pub fn init_tutor_bookings_router() -> Router<AppState> {
    Router::new().route("/bookings", get(list_tutor_bookings))
}
