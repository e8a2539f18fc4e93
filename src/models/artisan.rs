//! Artisans and their crafts

use serde::{Deserialize, Serialize};

use super::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraftType {
    Silk,
    Wood,
    Pottery,
    Painting,
    Sandalwood,
}

impl CraftType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CraftType::Silk => "silk",
            CraftType::Wood => "wood",
            CraftType::Pottery => "pottery",
            CraftType::Painting => "painting",
            CraftType::Sandalwood => "sandalwood",
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            CraftType::Silk => "🧵",
            CraftType::Wood => "🪵",
            CraftType::Pottery => "🏺",
            CraftType::Painting => "🖼️",
            CraftType::Sandalwood => "🪻",
        }
    }

    /// Badge color on artisan cards
    #[must_use]
    pub fn badge_color(&self) -> &'static str {
        match self {
            CraftType::Silk => "#d4a843",
            CraftType::Wood => "#c96442",
            CraftType::Pottery => "#c8a27a",
            CraftType::Painting => "#6b2137",
            CraftType::Sandalwood => "#f5ecd7",
        }
    }
}

/// All artisan markers share one gold base color regardless of craft.
pub const ARTISAN_MARKER_COLOR: &str = "#d4a843";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub craft: CraftType,
    pub specialty: String,
    pub story: String,
    pub experience: String,
    pub location: String,
    pub coordinates: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub products: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_cosmetics() {
        assert_eq!(CraftType::Silk.icon(), "🧵");
        assert_eq!(CraftType::Pottery.as_str(), "pottery");
        assert_eq!(CraftType::Painting.badge_color(), "#6b2137");
    }

    #[test]
    fn test_contact_is_optional() {
        let json = r#"{
            "id": "lakshmi-pottery",
            "name": "Lakshmi Devi Kumbhar",
            "craft": "pottery",
            "specialty": "Festival pottery",
            "story": "My hands have known clay for 50 years.",
            "experience": "50 years",
            "location": "Bannimantap Pottery Village",
            "coordinates": [12.3289, 76.6678],
            "products": ["Festival lamps"]
        }"#;
        let artisan: Artisan = serde_json::from_str(json).unwrap();
        assert_eq!(artisan.craft, CraftType::Pottery);
        assert!(artisan.contact.is_none());
    }
}
