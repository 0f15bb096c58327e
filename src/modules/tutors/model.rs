//! Tutor-facing shapes: directory entries, reviews, and weekly availability.

use serde::{Deserialize, Serialize};

/// A tutor as listed in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfile {
    pub id: String,
    pub name: String,
    pub headline: Option<String>,
    pub hourly_rate: f64,
    pub category: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub comment: Option<String>,
}

/// One recurring weekly availability slot. `day_of_week` follows the
/// backend's 0 = Sunday … 6 = Saturday convention; times are `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub id: String,
    pub tutor_id: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Slots for one weekday, for rendering. Days with no slots are never
/// materialized — the view omits them instead of showing empty sections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub day_of_week: u8,
    pub label: &'static str,
    pub slots: Vec<AvailabilitySlot>,
}

pub fn day_label(day_of_week: u8) -> &'static str {
    match day_of_week % 7 {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        _ => "Saturday",
    }
}

/// Tutor profile page composition: the profile plus its reviews. A failed
/// reviews fetch does not blank the page — the section is marked
/// unavailable and the rest renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfileView {
    pub tutor: TutorProfile,
    pub reviews: Vec<Review>,
    pub reviews_available: bool,
}

/// Query parameters accepted by the public directory view.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryFilterParams {
    pub category: Option<String>,
    pub min_rating: Option<f64>,
}
