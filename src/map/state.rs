//! Map highlight state as a pure value
//!
//! Every selection produces a fresh [`MapState`] from the previous one. Nothing
//! from the previous selection survives except the artisan layer toggle, so
//! switching selections can never leave stale highlights or lines behind.

use std::collections::BTreeMap;

use super::Viewport;
use crate::catalog::Catalog;
use crate::config::MapConfig;
use crate::selection::{self, Connector, EntityRef, HighlightRole, SelectionMode, SelectionToken};

#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    /// Canonical form of the token that produced this state
    pub selection: Option<String>,
    pub mode: SelectionMode,
    pub highlighted: BTreeMap<EntityRef, HighlightRole>,
    pub connectors: Vec<Connector>,
    pub viewport: Viewport,
    /// Entity whose callout is opened, set for single-entity focus
    pub callout: Option<EntityRef>,
    pub message: Option<String>,
    pub show_artisans: bool,
}

impl MapState {
    /// Nothing selected, overview viewport
    #[must_use]
    pub fn initial(settings: &MapConfig) -> Self {
        Self {
            selection: None,
            mode: SelectionMode::None,
            highlighted: BTreeMap::new(),
            connectors: Vec::new(),
            viewport: Viewport::overview(settings),
            callout: None,
            message: None,
            show_artisans: settings.show_artisans,
        }
    }

    /// State after selecting `token`, given the state before it.
    ///
    /// An unresolvable token yields the cleared state with the overview
    /// viewport.
    #[must_use]
    pub fn next(
        previous: &MapState,
        token: &SelectionToken,
        catalog: &Catalog,
        settings: &MapConfig,
    ) -> Self {
        let resolution = selection::resolve(catalog, token);
        if resolution.is_empty() {
            return Self {
                show_artisans: previous.show_artisans,
                ..Self::initial(settings)
            };
        }

        let (viewport, callout) = match resolution.mode {
            SelectionMode::Focus => {
                let only = &resolution.highlights[0];
                (
                    Viewport::focus(only.coordinates, settings),
                    Some(only.entity.clone()),
                )
            }
            SelectionMode::Redirect | SelectionMode::Trail => (
                Viewport::fit(resolution.highlights.iter().map(|h| &h.coordinates), settings),
                None,
            ),
            SelectionMode::None => (Viewport::overview(settings), None),
        };

        let highlighted = resolution
            .highlights
            .iter()
            .map(|h| (h.entity.clone(), h.role))
            .collect();

        Self {
            selection: Some(token.to_string()),
            mode: resolution.mode,
            highlighted,
            connectors: resolution.connectors,
            viewport,
            callout,
            message: resolution.message,
            show_artisans: previous.show_artisans,
        }
    }

    /// Same highlight, different artisan layer visibility
    #[must_use]
    pub fn with_artisans(&self, show_artisans: bool) -> Self {
        Self {
            show_artisans,
            ..self.clone()
        }
    }
}
