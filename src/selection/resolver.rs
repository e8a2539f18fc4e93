//! Selection resolver
//!
//! Turns a [`SelectionToken`] into the entities to highlight and the connector
//! lines between them. Resolution never fails: a token that matches nothing
//! produces [`SelectionMode::None`] with nothing highlighted.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::{EntityRef, SelectionToken};
use crate::catalog::Catalog;
use crate::models::{Artisan, LatLng, Place, Trail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Nothing matched; prior highlight is cleared
    None,
    /// A single place or artisan
    Focus,
    /// A high-crowd place fanned out to its quieter alternatives
    Redirect,
    /// Trail stops joined in sequence
    Trail,
}

impl SelectionMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::None => "none",
            SelectionMode::Focus => "focus",
            SelectionMode::Redirect => "redirect",
            SelectionMode::Trail => "trail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum HighlightRole {
    Focus,
    /// The crowded place being redirected away from
    Avoid,
    Recommended,
    TrailStop { order: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub entity: EntityRef,
    pub name: String,
    pub coordinates: LatLng,
    #[serde(flatten)]
    pub role: HighlightRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    Redirect,
    Route,
}

/// A line drawn between two highlighted entities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub kind: ConnectorKind,
    pub from: EntityRef,
    pub to: EntityRef,
    pub from_coordinates: LatLng,
    pub to_coordinates: LatLng,
    pub distance_km: f64,
}

impl Connector {
    fn between(kind: ConnectorKind, from: &Highlight, to: &Highlight) -> Self {
        Self {
            kind,
            from: from.entity.clone(),
            to: to.entity.clone(),
            from_coordinates: from.coordinates,
            to_coordinates: to.coordinates,
            distance_km: from.coordinates.distance_km(&to.coordinates),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub mode: SelectionMode,
    pub highlights: Vec<Highlight>,
    pub connectors: Vec<Connector>,
    /// Redirect message of a crowded place, or the name of a trail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Resolution {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mode: SelectionMode::None,
            highlights: Vec::new(),
            connectors: Vec::new(),
            message: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }
}

fn place_highlight(place: &Place, role: HighlightRole) -> Highlight {
    Highlight {
        entity: EntityRef::place(&place.id),
        name: place.name.clone(),
        coordinates: place.coordinates,
        role,
    }
}

fn artisan_highlight(artisan: &Artisan, role: HighlightRole) -> Highlight {
    Highlight {
        entity: EntityRef::artisan(&artisan.id),
        name: artisan.name.clone(),
        coordinates: artisan.coordinates,
        role,
    }
}

/// Resolve a selection token against the catalog.
///
/// Trail tokens are matched only against trails. Bare ids are looked up as a
/// place first and then as an artisan.
#[instrument(level = "debug", skip_all, fields(token = %token))]
pub fn resolve(catalog: &Catalog, token: &SelectionToken) -> Resolution {
    let resolution = match token {
        SelectionToken::Trail(id) => catalog
            .trail(id)
            .map(|trail| resolve_trail(catalog, trail)),
        SelectionToken::Place(id) => catalog.place(id).map(|place| resolve_place(catalog, place)),
        SelectionToken::Artisan(id) => catalog.artisan(id).map(resolve_artisan),
        SelectionToken::Bare(id) => catalog
            .place(id)
            .map(|place| resolve_place(catalog, place))
            .or_else(|| catalog.artisan(id).map(resolve_artisan)),
    };

    match resolution {
        Some(resolution) => {
            debug!(
                mode = ?resolution.mode,
                highlights = resolution.highlights.len(),
                connectors = resolution.connectors.len(),
                "Selection resolved"
            );
            resolution
        }
        None => {
            debug!("Selection matched nothing, clearing highlight");
            Resolution::empty()
        }
    }
}

fn resolve_place(catalog: &Catalog, place: &Place) -> Resolution {
    if place.redirects() {
        let alternatives: Vec<&Place> = place
            .alternative_place_ids
            .iter()
            .filter_map(|id| {
                let alternative = catalog.place(id);
                if alternative.is_none() {
                    warn!(place = %place.id, alternative = %id, "Skipping unknown alternative");
                }
                alternative
            })
            .collect();

        if !alternatives.is_empty() {
            let source = place_highlight(place, HighlightRole::Avoid);
            let recommended: Vec<Highlight> = alternatives
                .into_iter()
                .map(|alternative| place_highlight(alternative, HighlightRole::Recommended))
                .collect();
            // Star topology: every connector starts at the crowded place.
            let connectors = recommended
                .iter()
                .map(|target| Connector::between(ConnectorKind::Redirect, &source, target))
                .collect();

            let mut highlights = Vec::with_capacity(recommended.len() + 1);
            highlights.push(source);
            highlights.extend(recommended);

            return Resolution {
                mode: SelectionMode::Redirect,
                highlights,
                connectors,
                message: place.redirect_message.clone(),
            };
        }
    }

    Resolution {
        mode: SelectionMode::Focus,
        highlights: vec![place_highlight(place, HighlightRole::Focus)],
        connectors: Vec::new(),
        message: None,
    }
}

fn resolve_artisan(artisan: &Artisan) -> Resolution {
    Resolution {
        mode: SelectionMode::Focus,
        highlights: vec![artisan_highlight(artisan, HighlightRole::Focus)],
        connectors: Vec::new(),
        message: None,
    }
}

/// Route order is the trail's related places in declared order, then its
/// related artisans in declared order.
fn resolve_trail(catalog: &Catalog, trail: &Trail) -> Resolution {
    let places = trail.related_place_ids.iter().filter_map(|id| {
        let place = catalog.place(id);
        if place.is_none() {
            warn!(trail = %trail.id, place = %id, "Skipping unknown trail place");
        }
        place.map(|p| (EntityRef::place(&p.id), p.name.as_str(), p.coordinates))
    });
    let artisans = trail.related_artisan_ids.iter().filter_map(|id| {
        let artisan = catalog.artisan(id);
        if artisan.is_none() {
            warn!(trail = %trail.id, artisan = %id, "Skipping unknown trail artisan");
        }
        artisan.map(|a| (EntityRef::artisan(&a.id), a.name.as_str(), a.coordinates))
    });

    let highlights: Vec<Highlight> = places
        .chain(artisans)
        .enumerate()
        .map(|(order, (entity, name, coordinates))| Highlight {
            entity,
            name: name.to_string(),
            coordinates,
            role: HighlightRole::TrailStop { order },
        })
        .collect();

    let connectors = highlights
        .windows(2)
        .map(|pair| Connector::between(ConnectorKind::Route, &pair[0], &pair[1]))
        .collect();

    Resolution {
        mode: SelectionMode::Trail,
        highlights,
        connectors,
        message: Some(trail.name.clone()),
    }
}
