//! Map markers and their visual styles

use serde::Serialize;

use crate::models::{ARTISAN_MARKER_COLOR, Artisan, LatLng, Place};
use crate::selection::{ConnectorKind, EntityRef, HighlightRole};

const BASE_SIZE_PX: u32 = 36;
const HIGHLIGHT_SIZE_PX: u32 = 46;
const BASE_BORDER_PX: u32 = 3;
const HIGHLIGHT_BORDER_PX: u32 = 5;
const BASE_BORDER_COLOR: &str = "#ffffff";
const HIGH_CROWD_BORDER_COLOR: &str = "#dc2626";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    None,
    Focus,
    Avoid,
    Recommended,
    TrailStop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub size_px: u32,
    pub fill: &'static str,
    pub border_color: &'static str,
    pub border_px: u32,
    pub emphasis: Emphasis,
    /// Small text drawn on the marker, e.g. the stop number on a trail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One marker per place or artisan, created once and restyled in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub key: String,
    pub entity: EntityRef,
    pub name: String,
    pub position: LatLng,
    pub icon: &'static str,
    /// Detail shown in the marker's callout
    pub summary: String,
    /// Permanent crowd warning, kept whether or not the marker is selected
    pub high_crowd: bool,
    pub visible: bool,
    pub style: MarkerStyle,
    #[serde(skip)]
    base_fill: &'static str,
}

impl Marker {
    #[must_use]
    pub fn for_place(place: &Place) -> Self {
        let entity = EntityRef::place(&place.id);
        Self {
            key: entity.key(),
            entity,
            name: place.name.clone(),
            position: place.coordinates,
            icon: place.category.icon(),
            summary: format!("{} Best time: {}", place.description, place.best_time),
            high_crowd: place.is_high_crowd(),
            visible: true,
            style: base_style(place.category.marker_color(), place.is_high_crowd()),
            base_fill: place.category.marker_color(),
        }
    }

    #[must_use]
    pub fn for_artisan(artisan: &Artisan) -> Self {
        let entity = EntityRef::artisan(&artisan.id);
        Self {
            key: entity.key(),
            entity,
            name: artisan.name.clone(),
            position: artisan.coordinates,
            icon: artisan.craft.icon(),
            summary: format!("{} artisan. {}", capitalize(artisan.craft.as_str()), artisan.specialty),
            high_crowd: false,
            visible: true,
            style: base_style(ARTISAN_MARKER_COLOR, false),
            base_fill: ARTISAN_MARKER_COLOR,
        }
    }

    #[must_use]
    pub fn is_artisan(&self) -> bool {
        matches!(self.entity, EntityRef::Artisan(_))
    }

    /// Back to the unselected look; the high-crowd border survives.
    pub fn reset(&mut self) {
        self.style = base_style(self.base_fill, self.high_crowd);
    }

    pub fn highlight(&mut self, role: HighlightRole) {
        let (emphasis, border_color, label) = match role {
            HighlightRole::Focus => (Emphasis::Focus, "#6b2137", None),
            HighlightRole::Avoid => (Emphasis::Avoid, HIGH_CROWD_BORDER_COLOR, None),
            HighlightRole::Recommended => (Emphasis::Recommended, "#2d6a4f", None),
            HighlightRole::TrailStop { order } => {
                (Emphasis::TrailStop, "#d4a843", Some((order + 1).to_string()))
            }
        };
        self.style.size_px = HIGHLIGHT_SIZE_PX;
        self.style.border_px = HIGHLIGHT_BORDER_PX;
        self.style.border_color = border_color;
        self.style.emphasis = emphasis;
        self.style.label = label;
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.style.emphasis != Emphasis::None
    }
}

fn base_style(fill: &'static str, high_crowd: bool) -> MarkerStyle {
    MarkerStyle {
        size_px: BASE_SIZE_PX,
        fill,
        border_color: if high_crowd {
            HIGH_CROWD_BORDER_COLOR
        } else {
            BASE_BORDER_COLOR
        },
        border_px: BASE_BORDER_PX,
        emphasis: Emphasis::None,
        label: None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A drawn connector between two markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorLine {
    pub kind: ConnectorKind,
    pub from: String,
    pub to: String,
    pub points: [LatLng; 2],
    pub color: &'static str,
    pub weight_px: u32,
    pub dashed: bool,
    pub distance_km: f64,
}

impl ConnectorLine {
    #[must_use]
    pub fn new(connector: &crate::selection::Connector) -> Self {
        let (color, dashed) = match connector.kind {
            ConnectorKind::Redirect => ("#2d6a4f", true),
            ConnectorKind::Route => ("#d4a843", false),
        };
        Self {
            kind: connector.kind,
            from: connector.from.key(),
            to: connector.to.key(),
            points: [connector.from_coordinates, connector.to_coordinates],
            color,
            weight_px: 4,
            dashed,
            distance_km: connector.distance_km,
        }
    }
}
