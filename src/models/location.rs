//! Geographic coordinate pair used by every catalog entry

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

/// Latitude/longitude in decimal degrees.
///
/// Serialized as a `[lat, lng]` pair, the shape map libraries expect.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            HaversineLocation {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            Units::Kilometers,
        )
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.latitude, value.longitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_pair() {
        let palace = LatLng::new(12.3052, 76.6552);
        assert_eq!(serde_json::to_string(&palace).unwrap(), "[12.3052,76.6552]");

        let parsed: LatLng = serde_json::from_str("[12.2722, 76.677]").unwrap();
        assert_eq!(parsed, LatLng::new(12.2722, 76.677));
    }

    #[test]
    fn test_distance_between_palace_and_market() {
        let palace = LatLng::new(12.3052, 76.6552);
        let market = LatLng::new(12.3095, 76.6521);
        let km = palace.distance_km(&market);
        assert!(km > 0.4 && km < 0.7, "got {km}");
        assert_eq!(palace.distance_km(&palace), 0.0);
    }

    #[test]
    fn test_format_and_validity() {
        let point = LatLng::new(12.305_234, 76.655_21);
        assert_eq!(point.format_coordinates(), "12.3052, 76.6552");
        assert!(point.is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
    }
}
