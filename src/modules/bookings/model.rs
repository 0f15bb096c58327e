//! Booking shapes and the price-preview request DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A booking as reported by the backend. Price is a decimal string; the
/// backend owns the arithmetic of record, the gateway only previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub tutor_id: String,
    pub student_id: String,
    pub start_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub price: String,
    pub status: BookingStatus,
}

/// Request body for the booking price preview.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingPreviewDto {
    #[validate(range(min = 0.0, message = "Hourly rate cannot be negative"))]
    pub hourly_rate: f64,
    #[validate(range(
        min = 15,
        max = 480,
        message = "Duration must be between 15 minutes and 8 hours"
    ))]
    pub duration_minutes: u32,
}

/// Derived price preview shown before a booking is submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPreview {
    pub hourly_rate: f64,
    pub duration_minutes: u32,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn preview_dto_accepts_sane_input() {
        let dto = BookingPreviewDto {
            hourly_rate: 40.0,
            duration_minutes: 90,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn preview_dto_rejects_out_of_range_duration() {
        let too_short = BookingPreviewDto {
            hourly_rate: 40.0,
            duration_minutes: 5,
        };
        assert!(too_short.validate().is_err());

        let too_long = BookingPreviewDto {
            hourly_rate: 40.0,
            duration_minutes: 600,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn preview_dto_rejects_negative_rate() {
        let dto = BookingPreviewDto {
            hourly_rate: -1.0,
            duration_minutes: 60,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn booking_status_uses_screaming_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            r#""CONFIRMED""#
        );
        let status: BookingStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }
}
