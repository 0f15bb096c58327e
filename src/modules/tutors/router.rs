use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{list_tutors, my_availability, tutor_profile};

/// Public directory views — no guard.
pub fn init_directory_router() -> Router<AppState> {
    Router::new()
        .route("/views/tutors", get(list_tutors))
        .route("/views/tutors/{id}", get(tutor_profile))
}

/// Tutor-section views, mounted behind the tutor guard.
pub fn init_tutor_section_router() -> Router<AppState> {
    Router::new().route("/availability", get(my_availability))
}
