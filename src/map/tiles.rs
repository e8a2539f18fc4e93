//! Raster tile source for the basemap

use serde::Serialize;

use super::TileCoord;
use crate::config::{MAX_TILE_ZOOM, MapConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileSource {
    #[must_use]
    pub fn from_config(settings: &MapConfig) -> Self {
        Self {
            url_template: settings.tile_url.clone(),
            subdomains: settings.tile_subdomains.clone(),
            attribution: settings.attribution.clone(),
            max_zoom: MAX_TILE_ZOOM,
        }
    }

    /// Concrete URL for one tile. Subdomains rotate by tile position so
    /// neighbouring tiles are spread across hosts.
    #[must_use]
    pub fn tile_url(&self, tile: &TileCoord) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (u64::from(tile.col) + u64::from(tile.row)) % self.subdomains.len() as u64;
            self.subdomains[index as usize].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.col.to_string())
            .replace("{y}", &tile.row.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, "https://a.tile.openstreetmap.org/12/0/0.png")]
    #[case(1, 0, "https://b.tile.openstreetmap.org/12/1/0.png")]
    #[case(1, 1, "https://c.tile.openstreetmap.org/12/1/1.png")]
    #[case(2, 1, "https://a.tile.openstreetmap.org/12/2/1.png")]
    fn test_tile_url_rotates_subdomains(#[case] col: u32, #[case] row: u32, #[case] expected: &str) {
        let source = TileSource::from_config(&MapConfig::default());
        let tile = TileCoord::new(12, col, row, source.max_zoom).unwrap();
        assert_eq!(source.tile_url(&tile), expected);
    }

    #[test]
    fn test_tile_url_without_subdomains() {
        let mut settings = MapConfig::default();
        settings.tile_url = "https://tiles.example.org/{z}/{x}/{y}.png".to_string();
        settings.tile_subdomains.clear();
        let source = TileSource::from_config(&settings);
        let tile = TileCoord::new(3, 5, 2, source.max_zoom).unwrap();
        assert_eq!(source.tile_url(&tile), "https://tiles.example.org/3/5/2.png");
    }
}
