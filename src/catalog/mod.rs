//! Catalog store
//!
//! The read-only collections of places, artisans and trails. The builtin
//! catalog is compiled into the binary as JSON and parsed once on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::TrailsError;
use crate::models::{Artisan, CrowdLevel, Place, Trail};

const BUILTIN_CATALOG: &str = include_str!("mysuru.json");

static BUILTIN: LazyLock<Result<Catalog, String>> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_CATALOG)
        .and_then(|catalog| catalog.validate().map(|()| catalog))
        .map_err(|e| e.to_string())
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub places: Vec<Place>,
    pub artisans: Vec<Artisan>,
    pub trails: Vec<Trail>,
}

impl Catalog {
    /// The compiled-in Mysuru catalog, parsed and validated once per process.
    pub fn builtin() -> crate::Result<&'static Catalog> {
        BUILTIN
            .as_ref()
            .map_err(|message| TrailsError::validation(format!("builtin catalog: {message}")))
    }

    /// Parse a catalog document. Does not check cross references; see [`Catalog::validate`].
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| TrailsError::validation(format!("malformed catalog document: {e}")))?;
        debug!(
            places = catalog.places.len(),
            artisans = catalog.artisans.len(),
            trails = catalog.trails.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    #[must_use]
    pub fn artisan(&self, id: &str) -> Option<&Artisan> {
        self.artisans.iter().find(|artisan| artisan.id == id)
    }

    #[must_use]
    pub fn trail(&self, id: &str) -> Option<&Trail> {
        self.trails.iter().find(|trail| trail.id == id)
    }

    /// Place lookup that reports a miss as an error
    pub fn require_place(&self, id: &str) -> crate::Result<&Place> {
        self.place(id)
            .ok_or_else(|| TrailsError::not_found("place", id))
    }

    pub fn require_artisan(&self, id: &str) -> crate::Result<&Artisan> {
        self.artisan(id)
            .ok_or_else(|| TrailsError::not_found("artisan", id))
    }

    pub fn require_trail(&self, id: &str) -> crate::Result<&Trail> {
        self.trail(id)
            .ok_or_else(|| TrailsError::not_found("trail", id))
    }

    /// Check every data invariant and report all violations at once.
    #[instrument(level = "debug", skip(self))]
    pub fn validate(&self) -> crate::Result<()> {
        let mut problems = Vec::new();

        let mut place_ids = HashSet::new();
        for place in &self.places {
            if !place_ids.insert(place.id.as_str()) {
                problems.push(format!("duplicate place id '{}'", place.id));
            }
        }
        let mut artisan_ids = HashSet::new();
        for artisan in &self.artisans {
            if !artisan_ids.insert(artisan.id.as_str()) {
                problems.push(format!("duplicate artisan id '{}'", artisan.id));
            }
            // Bare selection tokens probe places first, so a shared id hides the artisan.
            if place_ids.contains(artisan.id.as_str()) {
                problems.push(format!(
                    "artisan id '{}' collides with a place id",
                    artisan.id
                ));
            }
        }
        let mut trail_ids = HashSet::new();
        for trail in &self.trails {
            if !trail_ids.insert(trail.id.as_str()) {
                problems.push(format!("duplicate trail id '{}'", trail.id));
            }
        }

        for place in &self.places {
            if !place.coordinates.is_valid() {
                problems.push(format!("place '{}' has invalid coordinates", place.id));
            }
            if place.crowd_level != CrowdLevel::High {
                if !place.alternative_place_ids.is_empty() {
                    problems.push(format!(
                        "place '{}' lists alternatives but is not high-crowd",
                        place.id
                    ));
                }
                if place.redirect_message.is_some() {
                    problems.push(format!(
                        "place '{}' has a redirect message but is not high-crowd",
                        place.id
                    ));
                }
            }
            for alternative in &place.alternative_place_ids {
                if alternative == &place.id {
                    problems.push(format!("place '{}' lists itself as an alternative", place.id));
                } else if !place_ids.contains(alternative.as_str()) {
                    problems.push(format!(
                        "place '{}' references unknown alternative '{}'",
                        place.id, alternative
                    ));
                }
            }
        }

        for artisan in &self.artisans {
            if !artisan.coordinates.is_valid() {
                problems.push(format!("artisan '{}' has invalid coordinates", artisan.id));
            }
        }

        for trail in &self.trails {
            let mut stops = HashSet::new();
            for id in trail.related_place_ids.iter().chain(&trail.related_artisan_ids) {
                if !stops.insert(id.as_str()) {
                    problems.push(format!("trail '{}' visits '{}' more than once", trail.id, id));
                }
            }
            for id in &trail.related_place_ids {
                if !place_ids.contains(id.as_str()) {
                    problems.push(format!(
                        "trail '{}' references unknown place '{}'",
                        trail.id, id
                    ));
                }
            }
            for id in &trail.related_artisan_ids {
                if !artisan_ids.contains(id.as_str()) {
                    problems.push(format!(
                        "trail '{}' references unknown artisan '{}'",
                        trail.id, id
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(TrailsError::validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LatLng, PlaceCategory};

    fn place(id: &str, crowd: CrowdLevel, alternatives: &[&str]) -> Place {
        Place {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            long_description: String::new(),
            category: PlaceCategory::Heritage,
            coordinates: LatLng::new(12.3, 76.6),
            crowd_level: crowd,
            best_time: String::new(),
            highlights: vec![],
            alternative_place_ids: alternatives.iter().map(|s| s.to_string()).collect(),
            redirect_message: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.places.len(), 25);
        assert_eq!(catalog.artisans.len(), 6);
        assert_eq!(catalog.trails.len(), 5);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.place("mysore-palace").unwrap().name, "Mysore Palace");
        assert_eq!(catalog.artisan("rajanna-silk").unwrap().name, "Shri Rajanna & Sons");
        assert_eq!(catalog.trail("silk-craft-trail").unwrap().name, "Silk & Craft Trail");
        assert!(catalog.place("rajanna-silk").is_none());
        assert!(matches!(
            catalog.require_trail("moon-walk"),
            Err(TrailsError::NotFound { kind: "trail", .. })
        ));
    }

    #[test]
    fn test_validate_reports_dangling_alternative() {
        let catalog = Catalog {
            places: vec![place("palace", CrowdLevel::High, &["nowhere"])],
            ..Default::default()
        };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown alternative 'nowhere'"));
    }

    #[test]
    fn test_validate_rejects_alternatives_on_quiet_place() {
        let catalog = Catalog {
            places: vec![
                place("lane", CrowdLevel::Low, &["market"]),
                place("market", CrowdLevel::Medium, &[]),
            ],
            ..Default::default()
        };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("'lane' lists alternatives but is not high-crowd"));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut catalog = Catalog {
            places: vec![
                place("palace", CrowdLevel::High, &["palace"]),
                place("palace", CrowdLevel::Low, &[]),
            ],
            ..Default::default()
        };
        catalog.trails = Catalog::builtin().unwrap().trails[..1].to_vec();
        let message = catalog.validate().unwrap_err().to_string();
        assert!(message.contains("duplicate place id 'palace'"));
        assert!(message.contains("lists itself as an alternative"));
        assert!(message.contains("references unknown place 'silk-weaving-kuvempunagar'"));
        assert!(message.contains("references unknown artisan 'rajanna-silk'"));
    }

    #[test]
    fn test_validate_reports_id_collision() {
        let mut catalog = Catalog::builtin().unwrap().clone();
        let mut twin = catalog.artisans[0].clone();
        twin.id = "karanji-lake".to_string();
        catalog.artisans.push(twin);

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, TrailsError::Validation { .. }));
        assert!(err
            .to_string()
            .contains("artisan id 'karanji-lake' collides with a place id"));
    }

    #[test]
    fn test_validate_rejects_redirect_message_on_quiet_place() {
        let mut lane = place("lane", CrowdLevel::Medium, &[]);
        lane.redirect_message = Some("Too busy, try elsewhere".to_string());
        let catalog = Catalog {
            places: vec![lane],
            ..Default::default()
        };
        let err = catalog.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("'lane' has a redirect message but is not high-crowd"));

        let mut palace = place("palace", CrowdLevel::High, &[]);
        palace.redirect_message = Some("Too busy, try elsewhere".to_string());
        let catalog = Catalog {
            places: vec![palace],
            ..Default::default()
        };
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_repeated_trail_stop() {
        let mut catalog = Catalog::builtin().unwrap().clone();
        let trail = &mut catalog.trails[0];
        let first = trail.related_place_ids[0].clone();
        trail.related_place_ids.push(first.clone());

        let message = catalog.validate().unwrap_err().to_string();
        assert!(message.contains(&format!(
            "trail 'silk-craft-trail' visits '{first}' more than once"
        )));
    }

    #[test]
    fn test_malformed_document() {
        let err = Catalog::from_json("{\"places\": 3}").unwrap_err();
        assert!(matches!(err, TrailsError::Validation { .. }));
    }
}
