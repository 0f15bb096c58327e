use axum::{Json, extract::State};
use tracing::instrument;

use crate::metrics;
use crate::middleware::section::{CurrentUser, ForwardedCookies};
use crate::modules::bookings::model::{Booking, BookingPreview, BookingPreviewDto};
use crate::modules::bookings::service::BookingService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// The signed-in student's bookings. The `CurrentUser` extractor documents
/// that this route only exists behind the student guard.
#[instrument(skip_all)]
pub async fn list_student_bookings(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    ForwardedCookies(cookies): ForwardedCookies,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingService::bookings_for_student(&state.client, cookies.as_deref())
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(bookings))
}

/// Price preview for a booking form: no backend call, no persistence.
#[instrument(skip_all)]
pub async fn preview_booking(
    CurrentUser(_user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<BookingPreviewDto>,
) -> Json<BookingPreview> {
    let price = BookingService::preview_price(dto.hourly_rate, dto.duration_minutes);
    metrics::track_price_preview();

    Json(BookingPreview {
        hourly_rate: dto.hourly_rate,
        duration_minutes: dto.duration_minutes,
        price,
    })
}

/// The signed-in tutor's bookings.
#[instrument(skip_all)]
pub async fn list_tutor_bookings(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    ForwardedCookies(cookies): ForwardedCookies,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingService::bookings_for_tutor(&state.client, cookies.as_deref())
        .await
        .map_err(AppError::bad_gateway)?;

    Ok(Json(bookings))
}
