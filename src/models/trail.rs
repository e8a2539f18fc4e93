//! Curated trails linking places and artisans

use serde::{Deserialize, Serialize};

use super::LatLng;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub duration: String,
    pub distance: String,
    /// Display labels only; not catalog ids
    pub stops: Vec<String>,
    pub highlights: Vec<String>,
    pub best_for: Vec<String>,
    pub start_point: String,
    pub coordinates: LatLng,
    pub related_place_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_artisan_ids: Vec<String>,
}

impl Trail {
    #[must_use]
    pub fn icon(&self) -> &'static str {
        trail_icon(&self.id)
    }

    /// Number of catalog entities the trail route passes through
    #[must_use]
    pub fn related_count(&self) -> usize {
        self.related_place_ids.len() + self.related_artisan_ids.len()
    }
}

#[must_use]
pub fn trail_icon(id: &str) -> &'static str {
    match id {
        "silk-craft-trail" => "🧵",
        "heritage-street-walk" => "🏛️",
        "nature-lakes-trail" => "🌿",
        "artisan-trail" => "🎨",
        "food-heritage-trail" => "🍛",
        _ => "📍",
    }
}
