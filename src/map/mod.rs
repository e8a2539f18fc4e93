//! Map annotation: markers, highlight state, viewport fitting and tiles

pub mod annotator;
pub mod marker;
pub mod projection;
pub mod state;
pub mod tiles;
pub mod viewport;

pub use annotator::{MapAnnotator, MapScene};
pub use marker::{ConnectorLine, Emphasis, Marker, MarkerStyle};
pub use projection::{MAX_LATITUDE, TILE_SIZE, TileCoord, project};
pub use state::MapState;
pub use tiles::TileSource;
pub use viewport::{Bounds, Viewport, fit_zoom};
