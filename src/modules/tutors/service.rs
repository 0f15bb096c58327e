use std::collections::BTreeMap;

use tracing::{instrument, warn};

use crate::client::{ApiClient, ApiError};
use crate::modules::tutors::model::{
    AvailabilitySlot, DayGroup, DirectoryFilterParams, Review, TutorProfile, TutorProfileView,
    day_label,
};

pub struct TutorService;

impl TutorService {
    /// Public tutor directory, filtered for display. Filtering happens
    /// gateway-side on the fetched list; the backend endpoint is unfiltered.
    #[instrument(skip(client))]
    pub async fn directory(
        client: &ApiClient,
        filters: DirectoryFilterParams,
    ) -> Result<Vec<TutorProfile>, ApiError> {
        let tutors: Vec<TutorProfile> = client.get_data("/api/tutors", None).await?;
        Ok(filter_directory(tutors, &filters))
    }

    /// Tutor profile page composition. The profile fetch is load-bearing;
    /// the reviews fetch degrades to an unavailable section on failure so
    /// one failed call does not blank the page.
    #[instrument(skip(client))]
    pub async fn profile_view(
        client: &ApiClient,
        tutor_id: &str,
    ) -> Result<TutorProfileView, ApiError> {
        let tutor: TutorProfile = client
            .get_data(&format!("/api/tutors/{tutor_id}"), None)
            .await?;

        let (reviews, reviews_available) = match client
            .get_data::<Vec<Review>>(&format!("/api/tutors/{tutor_id}/reviews"), None)
            .await
        {
            Ok(reviews) => (reviews, true),
            Err(err) => {
                warn!(tutor_id, "reviews fetch failed: {err}");
                (Vec::new(), false)
            }
        };

        Ok(TutorProfileView {
            tutor,
            reviews,
            reviews_available,
        })
    }

    /// The signed-in tutor's weekly availability, grouped for rendering.
    #[instrument(skip(client, cookies))]
    pub async fn my_availability(
        client: &ApiClient,
        cookies: Option<&str>,
    ) -> Result<Vec<DayGroup>, ApiError> {
        let slots: Vec<AvailabilitySlot> = client
            .get_data("/api/tutors/me/availability", cookies)
            .await?;
        Ok(group_slots_by_day(slots))
    }
}

/// Group slots by weekday, Monday first, slots ordered by start time within
/// each day. Days without slots are omitted entirely.
pub fn group_slots_by_day(slots: Vec<AvailabilitySlot>) -> Vec<DayGroup> {
    // Key by Monday-first index so iteration order matches render order.
    let mut by_day: BTreeMap<u8, Vec<AvailabilitySlot>> = BTreeMap::new();
    for slot in slots {
        let day = slot.day_of_week % 7;
        by_day.entry((day + 6) % 7).or_default().push(slot);
    }

    by_day
        .into_values()
        .map(|mut slots| {
            slots.sort_by(|a, b| a.start_time.cmp(&b.start_time));
            let day = slots[0].day_of_week % 7;
            DayGroup {
                day_of_week: day,
                label: day_label(day),
                slots,
            }
        })
        .collect()
}

/// Apply the directory's display filters.
pub fn filter_directory(
    tutors: Vec<TutorProfile>,
    filters: &DirectoryFilterParams,
) -> Vec<TutorProfile> {
    tutors
        .into_iter()
        .filter(|tutor| {
            if let Some(category) = &filters.category
                && tutor.category.as_deref() != Some(category.as_str())
            {
                return false;
            }
            if let Some(min_rating) = filters.min_rating
                && tutor.rating.unwrap_or(0.0) < min_rating
            {
                return false;
            }
            true
        })
        .collect()
}
