//! `Mysuru Trails` - a decentralised tourism guide for Mysuru
//!
//! This library holds the place, artisan and trail catalog, resolves map
//! selections into highlights and connector lines, and filters places for
//! the list view.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod map;
pub mod models;
pub mod selection;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::TrailsConfig;
pub use error::TrailsError;
pub use listing::{CategoryFilter, CrowdFilter, Filter, filter_places};
pub use map::{MapAnnotator, MapScene, MapState, Viewport};
pub use models::{Artisan, CrowdLevel, LatLng, Place, PlaceCategory, Trail};
pub use selection::{EntityRef, Resolution, SelectionMode, SelectionToken, resolve};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TrailsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
