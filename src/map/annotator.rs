//! Map annotator
//!
//! Owns one [`Marker`] per place and artisan for the lifetime of the map and
//! restyles them whenever the [`MapState`] changes. Applying a state always
//! resets every marker and drops every connector line before the new
//! highlight is drawn.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};

use super::{ConnectorLine, MapState, Marker, Viewport};
use crate::catalog::Catalog;
use crate::config::MapConfig;
use crate::selection::{EntityRef, SelectionMode, SelectionToken};

/// Everything a client needs to draw the map for one state
#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    pub selection: Option<String>,
    pub mode: SelectionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub show_artisans: bool,
    pub markers: Vec<Marker>,
    pub lines: Vec<ConnectorLine>,
    pub viewport: Viewport,
    /// Key of the marker whose callout is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<String>,
}

pub struct MapAnnotator<'a> {
    catalog: &'a Catalog,
    settings: MapConfig,
    markers: Vec<Marker>,
    index: HashMap<EntityRef, usize>,
    lines: Vec<ConnectorLine>,
    state: MapState,
}

impl<'a> MapAnnotator<'a> {
    /// Create markers for every place, then every artisan, in catalog order.
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: MapConfig) -> Self {
        let markers: Vec<Marker> = catalog
            .places
            .iter()
            .map(Marker::for_place)
            .chain(catalog.artisans.iter().map(Marker::for_artisan))
            .collect();
        let index = markers
            .iter()
            .enumerate()
            .map(|(i, marker)| (marker.entity.clone(), i))
            .collect();
        let state = MapState::initial(&settings);

        let mut annotator = Self {
            catalog,
            settings,
            markers,
            index,
            lines: Vec::new(),
            state,
        };
        annotator.render();
        annotator
    }

    /// Select a token and redraw. Unknown tokens clear the map.
    pub fn select(&mut self, token: &SelectionToken) -> &MapState {
        let next = MapState::next(&self.state, token, self.catalog, &self.settings);
        self.apply(next)
    }

    /// Drop any selection, keep the artisan layer setting.
    pub fn clear(&mut self) -> &MapState {
        let next = MapState {
            show_artisans: self.state.show_artisans,
            ..MapState::initial(&self.settings)
        };
        self.apply(next)
    }

    pub fn set_show_artisans(&mut self, show: bool) -> &MapState {
        let next = self.state.with_artisans(show);
        self.apply(next)
    }

    /// Replace the current state and redraw everything from scratch.
    pub fn apply(&mut self, state: MapState) -> &MapState {
        self.state = state;
        self.render();
        &self.state
    }

    #[instrument(level = "debug", skip_all, fields(selection = ?self.state.selection))]
    fn render(&mut self) {
        for marker in &mut self.markers {
            marker.reset();
            marker.visible = !marker.is_artisan() || self.state.show_artisans;
        }
        self.lines.clear();

        for (entity, role) in &self.state.highlighted {
            if let Some(&i) = self.index.get(entity) {
                let marker = &mut self.markers[i];
                marker.highlight(*role);
                // A highlighted artisan is shown even with the layer hidden
                marker.visible = true;
            }
        }
        self.lines
            .extend(self.state.connectors.iter().map(ConnectorLine::new));

        debug!(
            highlighted = self.state.highlighted.len(),
            lines = self.lines.len(),
            "Map redrawn"
        );
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn marker(&self, entity: &EntityRef) -> Option<&Marker> {
        self.index.get(entity).map(|&i| &self.markers[i])
    }

    #[must_use]
    pub fn lines(&self) -> &[ConnectorLine] {
        &self.lines
    }

    #[must_use]
    pub fn state(&self) -> &MapState {
        &self.state
    }

    #[must_use]
    pub fn scene(&self) -> MapScene {
        MapScene {
            selection: self.state.selection.clone(),
            mode: self.state.mode,
            message: self.state.message.clone(),
            show_artisans: self.state.show_artisans,
            markers: self.markers.clone(),
            lines: self.lines.clone(),
            viewport: self.state.viewport.clone(),
            callout: self.state.callout.as_ref().map(EntityRef::key),
        }
    }
}
