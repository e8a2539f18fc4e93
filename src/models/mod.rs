//! Data models for the Mysuru Trails application
//!
//! This module contains the catalog's domain models organized by concern:
//! - Location: Geographic coordinate pairs and distances
//! - Place: Sights with category and crowd level
//! - Artisan: Craftspeople and their workshops
//! - Trail: Curated routes through places and artisans

pub mod artisan;
pub mod location;
pub mod place;
pub mod trail;

// Re-export all public types for convenient access
pub use artisan::{ARTISAN_MARKER_COLOR, Artisan, CraftType};
pub use location::LatLng;
pub use place::{CrowdLevel, Place, PlaceCategory};
pub use trail::{Trail, trail_icon};
