use tracing::instrument;

use crate::client::{ApiClient, ApiError};
use crate::modules::bookings::model::Booking;

pub struct BookingService;

impl BookingService {
    /// Price preview: hourly rate times the fraction of an hour booked,
    /// formatted to two decimals for display. A preview only — the backend
    /// computes the price of record at booking time.
    pub fn preview_price(hourly_rate: f64, duration_minutes: u32) -> String {
        format!("{:.2}", hourly_rate * f64::from(duration_minutes) / 60.0)
    }

    #[instrument(skip(client, cookies))]
    pub async fn bookings_for_student(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<Vec<Booking>, ApiError> {
        client.get_data("/api/bookings/me", cookies).await
    }

    #[instrument(skip(client, cookies))]
    pub async fn bookings_for_tutor(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<Vec<Booking>, ApiError> {
        client.get_data("/api/tutors/me/bookings", cookies).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_price_ninety_minutes() {
        assert_eq!(BookingService::preview_price(40.0, 90), "60.00");
    }

    #[test]
    fn preview_price_full_hour() {
        assert_eq!(BookingService::preview_price(25.0, 60), "25.00");
    }

    #[test]
    fn preview_price_half_hour() {
        assert_eq!(BookingService::preview_price(50.0, 30), "25.00");
    }

    #[test]
    fn preview_price_three_quarter_hour() {
        assert_eq!(BookingService::preview_price(33.0, 45), "24.75");
    }

    #[test]
    fn preview_price_pads_to_two_decimals() {
        assert_eq!(BookingService::preview_price(0.0, 60), "0.00");
        assert_eq!(BookingService::preview_price(19.9, 60), "19.90");
    }
}
