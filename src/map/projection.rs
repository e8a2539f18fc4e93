//! Web Mercator projection and slippy-map tile coordinates

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::TrailsError;
use crate::models::LatLng;

/// Web Mercator valid latitude range
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Raster tile edge in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Project a coordinate to world pixel space at `zoom`.
///
/// Origin is the north-west corner; x grows east, y grows south.
#[must_use]
pub fn project(point: &LatLng, zoom: u8) -> (f64, f64) {
    let world = TILE_SIZE * 2_f64.powi(i32::from(zoom));
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lat_rad = lat.to_radians();

    let x = (point.longitude + 180.0) / 360.0 * world;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * world;
    (x, y)
}

/// Tile coordinates in the slippy-map scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    pub zoom: u8,
    /// X coordinate (west to east)
    pub col: u32,
    /// Y coordinate (north to south)
    pub row: u32,
}

impl TileCoord {
    /// Build a tile coordinate, rejecting columns or rows outside the zoom level's grid.
    pub fn new(zoom: u8, col: u32, row: u32, max_zoom: u8) -> crate::Result<Self> {
        if zoom > max_zoom {
            return Err(TrailsError::validation(format!(
                "zoom {zoom} exceeds maximum {max_zoom}"
            )));
        }
        let n = 1_u64.checked_shl(u32::from(zoom)).unwrap_or(u64::MAX);
        if u64::from(col) >= n || u64::from(row) >= n {
            return Err(TrailsError::validation(format!(
                "tile {col}/{row} outside the {n}x{n} grid at zoom {zoom}"
            )));
        }
        Ok(Self { zoom, col, row })
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_prime_meridian_is_world_center() {
        let (x, y) = project(&LatLng::new(0.0, 0.0), 1);
        assert!((x - 256.0).abs() < 1e-9);
        assert!((y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_poles() {
        let (_, north) = project(&LatLng::new(90.0, 0.0), 0);
        assert!(north.abs() < 1e-3);
    }

    #[test]
    fn test_tile_validation() {
        assert!(TileCoord::new(2, 3, 3, 19).is_ok());
        assert!(TileCoord::new(2, 4, 0, 19).is_err());
        assert!(TileCoord::new(20, 0, 0, 19).is_err());
        assert_eq!(TileCoord::new(0, 0, 0, 19).unwrap().to_string(), "0/0/0");
    }
}
