use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use crate::middleware::section::ForwardedCookies;
use crate::modules::tutors::model::{
    DayGroup, DirectoryFilterParams, TutorProfile, TutorProfileView,
};
use crate::modules::tutors::service::TutorService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Public tutor directory, optionally filtered by category and rating.
#[instrument(skip(state))]
pub async fn list_tutors(
    State(state): State<AppState>,
    Query(filters): Query<DirectoryFilterParams>,
) -> Result<Json<Vec<TutorProfile>>, AppError> {
    let tutors = TutorService::directory(&state.client, filters)
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(tutors))
}

/// Public tutor profile page: profile plus reviews.
#[instrument(skip(state))]
pub async fn tutor_profile(
    State(state): State<AppState>,
    Path(tutor_id): Path<String>,
) -> Result<Json<TutorProfileView>, AppError> {
    let view = TutorService::profile_view(&state.client, &tutor_id)
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(view))
}

/// The signed-in tutor's weekly availability, grouped by day for rendering.
#[instrument(skip(state, cookies))]
pub async fn my_availability(
    State(state): State<AppState>,
    ForwardedCookies(cookies): ForwardedCookies,
) -> Result<Json<Vec<DayGroup>>, AppError> {
    let groups = TutorService::my_availability(&state.client, cookies.as_deref())
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(groups))
}
