//! Places: the sights, streets and lakes shown as cards and map markers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::LatLng;
use crate::TrailsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Heritage,
    Art,
    Nature,
    Food,
    Culture,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 5] = [
        PlaceCategory::Heritage,
        PlaceCategory::Art,
        PlaceCategory::Nature,
        PlaceCategory::Food,
        PlaceCategory::Culture,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Heritage => "heritage",
            PlaceCategory::Art => "art",
            PlaceCategory::Nature => "nature",
            PlaceCategory::Food => "food",
            PlaceCategory::Culture => "culture",
        }
    }

    /// Label used on filter buttons and the map legend
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Heritage => "Heritage",
            PlaceCategory::Art => "Art & Craft",
            PlaceCategory::Nature => "Nature",
            PlaceCategory::Food => "Food",
            PlaceCategory::Culture => "Culture",
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            PlaceCategory::Heritage => "🏛️",
            PlaceCategory::Art => "🎨",
            PlaceCategory::Nature => "🌿",
            PlaceCategory::Food => "🍛",
            PlaceCategory::Culture => "🪔",
        }
    }

    /// Base marker color on the map
    #[must_use]
    pub fn marker_color(&self) -> &'static str {
        match self {
            PlaceCategory::Heritage => "#6b2137",
            PlaceCategory::Art | PlaceCategory::Culture => "#d4a843",
            PlaceCategory::Nature => "#2d6a4f",
            PlaceCategory::Food => "#c96442",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = TrailsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaceCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrailsError::validation(format!("unknown place category '{s}'")))
    }
}

/// Qualitative visitor density at a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 3] = [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "low",
            CrowdLevel::Medium => "medium",
            CrowdLevel::High => "high",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low Crowd",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "Popular",
        }
    }

    /// Badge color for crowd indicators
    #[must_use]
    pub fn badge_color(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "#2d6a4f",
            CrowdLevel::Medium => "#d4a843",
            CrowdLevel::High => "#6b2137",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrowdLevel {
    type Err = TrailsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrowdLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrailsError::validation(format!("unknown crowd level '{s}'")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub category: PlaceCategory,
    pub coordinates: LatLng,
    pub crowd_level: CrowdLevel,
    pub best_time: String,
    pub highlights: Vec<String>,
    /// Quieter places suggested instead of this one; only on high-crowd places
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_place_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_message: Option<String>,
}

impl Place {
    #[must_use]
    pub fn is_high_crowd(&self) -> bool {
        self.crowd_level == CrowdLevel::High
    }

    /// True when selecting this place should redirect visitors elsewhere
    #[must_use]
    pub fn redirects(&self) -> bool {
        self.is_high_crowd() && !self.alternative_place_ids.is_empty()
    }
}
