//! Viewport hints: what part of the map to show after a selection

use serde::Serialize;

use super::projection::project;
use crate::config::MapConfig;
use crate::models::LatLng;

/// Axis-aligned geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point; `None` for an empty input.
    #[must_use]
    pub fn around<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for point in points {
            bounds.south_west.latitude = bounds.south_west.latitude.min(point.latitude);
            bounds.south_west.longitude = bounds.south_west.longitude.min(point.longitude);
            bounds.north_east.latitude = bounds.north_east.latitude.max(point.latitude);
            bounds.north_east.longitude = bounds.north_east.longitude.max(point.longitude);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// True when every point collapsed onto a single coordinate
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Viewport {
    /// Initial view, nothing selected
    Overview { center: LatLng, zoom: u8 },
    /// Close-up on one coordinate
    Focus { center: LatLng, zoom: u8 },
    /// Fit a set of coordinates with padding on every side
    Fit {
        bounds: Bounds,
        padding_px: u32,
        center: LatLng,
        zoom: u8,
    },
}

impl Viewport {
    #[must_use]
    pub fn overview(settings: &MapConfig) -> Self {
        Viewport::Overview {
            center: settings.center,
            zoom: settings.default_zoom,
        }
    }

    #[must_use]
    pub fn focus(center: LatLng, settings: &MapConfig) -> Self {
        Viewport::Focus {
            center,
            zoom: settings.focus_zoom,
        }
    }

    /// Fit the given coordinates. Falls back to the overview for no points and
    /// to a focus view when all points coincide.
    #[must_use]
    pub fn fit<'a>(points: impl IntoIterator<Item = &'a LatLng>, settings: &MapConfig) -> Self {
        match Bounds::around(points) {
            None => Viewport::overview(settings),
            Some(bounds) if bounds.is_point() => Viewport::focus(bounds.south_west, settings),
            Some(bounds) => Viewport::Fit {
                bounds,
                padding_px: settings.fit_padding_px,
                center: bounds.center(),
                zoom: fit_zoom(&bounds, settings),
            },
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        match self {
            Viewport::Overview { center, .. }
            | Viewport::Focus { center, .. }
            | Viewport::Fit { center, .. } => *center,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        match self {
            Viewport::Overview { zoom, .. }
            | Viewport::Focus { zoom, .. }
            | Viewport::Fit { zoom, .. } => *zoom,
        }
    }
}

/// Highest zoom at which `bounds` fits inside the padded viewport, capped at
/// `max_fit_zoom`.
#[must_use]
pub fn fit_zoom(bounds: &Bounds, settings: &MapConfig) -> u8 {
    let padding = settings.fit_padding_px.saturating_mul(2);
    let usable_width = f64::from(settings.viewport_width_px.saturating_sub(padding).max(1));
    let usable_height = f64::from(settings.viewport_height_px.saturating_sub(padding).max(1));

    let north_west = LatLng::new(bounds.north_east.latitude, bounds.south_west.longitude);
    let south_east = LatLng::new(bounds.south_west.latitude, bounds.north_east.longitude);

    (0..=settings.max_fit_zoom)
        .rev()
        .find(|&zoom| {
            let (left, top) = project(&north_west, zoom);
            let (right, bottom) = project(&south_east, zoom);
            right - left <= usable_width && bottom - top <= usable_height
        })
        .unwrap_or(0)
}
