//! Time-of-day suggestions of quiet places

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{CrowdLevel, Place, PlaceCategory};

/// Most places shown in one recommendation
pub const MAX_RECOMMENDED: usize = 4;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub hour: u32,
    pub time_context: &'static str,
    pub message: &'static str,
    pub places: Vec<&'a Place>,
}

/// Low-crowd places suited to the given hour of the day (0-23).
#[must_use]
pub fn recommend_for_hour(catalog: &Catalog, hour: u32) -> Recommendation<'_> {
    let quiet = || {
        catalog
            .places
            .iter()
            .filter(|place| place.crowd_level == CrowdLevel::Low)
    };
    let in_categories = |categories: &[PlaceCategory]| {
        quiet()
            .filter(|place| categories.contains(&place.category))
            .take(MAX_RECOMMENDED)
            .collect::<Vec<_>>()
    };

    let (time_context, message, places) = match hour {
        5..=8 => (
            "Early Morning",
            "Perfect time for nature walks and birdwatching!",
            in_categories(&[PlaceCategory::Nature]),
        ),
        9..=11 => (
            "Morning",
            "Artisans are at work - great time to visit workshops!",
            in_categories(&[PlaceCategory::Art]),
        ),
        12..=15 => (
            "Afternoon",
            "Avoid peak heat - explore indoor heritage sites.",
            in_categories(&[PlaceCategory::Heritage]),
        ),
        16..=18 => (
            "Evening",
            "Golden hour - perfect for heritage walks and food trails!",
            in_categories(&[PlaceCategory::Culture, PlaceCategory::Food]),
        ),
        _ => (
            "Evening/Night",
            "Limited options - plan your morning adventure!",
            quiet().take(3).collect(),
        ),
    };

    Recommendation {
        hour,
        time_context,
        message,
        places,
    }
}

/// Recommendation for the current local hour
#[must_use]
pub fn recommend_now(catalog: &Catalog) -> Recommendation<'_> {
    recommend_for_hour(catalog, Local::now().hour())
}
