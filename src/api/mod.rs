use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Json, Redirect},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{
    TrailsError,
    catalog::Catalog,
    config::MapConfig,
    listing::{self, CategoryFilter, CrowdFilter},
    map::{MapAnnotator, MapScene, TileCoord, TileSource},
    models::{Artisan, LatLng, Place, Trail},
    selection::SelectionToken,
};

/// Shared, read-only state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub map: Arc<MapConfig>,
    pub tiles: Arc<TileSource>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, map: MapConfig) -> Self {
        let tiles = TileSource::from_config(&map);
        Self {
            catalog: Arc::new(catalog),
            map: Arc::new(map),
            tiles: Arc::new(tiles),
        }
    }

    /// State over the compiled-in catalog
    pub fn builtin(map: MapConfig) -> crate::Result<Self> {
        Ok(Self::new(Catalog::builtin()?.clone(), map))
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiEntityLink {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiPlace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub category_label: String,
    pub icon: String,
    pub marker_color: String,
    pub crowd_level: String,
    pub crowd_label: String,
    pub crowd_color: String,
    pub best_time: String,
    pub highlights: Vec<String>,
    pub coordinates: LatLng,
    /// Selecting this place shows quieter alternatives instead
    pub redirects: bool,
}

impl From<&Place> for ApiPlace {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            description: place.description.clone(),
            category: place.category.as_str().to_string(),
            category_label: place.category.label().to_string(),
            icon: place.category.icon().to_string(),
            marker_color: place.category.marker_color().to_string(),
            crowd_level: place.crowd_level.as_str().to_string(),
            crowd_label: place.crowd_level.label().to_string(),
            crowd_color: place.crowd_level.badge_color().to_string(),
            best_time: place.best_time.clone(),
            highlights: place.highlights.clone(),
            coordinates: place.coordinates,
            redirects: place.redirects(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiPlaceDetail {
    #[serde(flatten)]
    pub place: ApiPlace,
    pub long_description: String,
    pub alternatives: Vec<ApiEntityLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_message: Option<String>,
}

impl ApiPlaceDetail {
    fn new(place: &Place, catalog: &Catalog) -> Self {
        Self {
            place: ApiPlace::from(place),
            long_description: place.long_description.clone(),
            alternatives: place
                .alternative_place_ids
                .iter()
                .filter_map(|id| catalog.place(id))
                .map(|alt| ApiEntityLink {
                    id: alt.id.clone(),
                    name: alt.name.clone(),
                })
                .collect(),
            redirect_message: place.redirect_message.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiArtisan {
    pub id: String,
    pub name: String,
    pub craft: String,
    pub icon: String,
    pub craft_color: String,
    pub specialty: String,
    pub story: String,
    pub experience: String,
    pub location: String,
    pub coordinates: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub products: Vec<String>,
}

impl From<&Artisan> for ApiArtisan {
    fn from(artisan: &Artisan) -> Self {
        Self {
            id: artisan.id.clone(),
            name: artisan.name.clone(),
            craft: artisan.craft.as_str().to_string(),
            icon: artisan.craft.icon().to_string(),
            craft_color: artisan.craft.badge_color().to_string(),
            specialty: artisan.specialty.clone(),
            story: artisan.story.clone(),
            experience: artisan.experience.clone(),
            location: artisan.location.clone(),
            coordinates: artisan.coordinates,
            contact: artisan.contact.clone(),
            products: artisan.products.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiTrail {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub tagline: String,
    pub description: String,
    pub duration: String,
    pub distance: String,
    pub stops: Vec<String>,
    pub highlights: Vec<String>,
    pub best_for: Vec<String>,
    pub start_point: String,
    pub coordinates: LatLng,
    pub places: Vec<ApiEntityLink>,
    pub artisans: Vec<ApiEntityLink>,
    pub stop_count: usize,
    /// Token to pass to `/api/map` to show this trail
    pub selection: String,
}

impl ApiTrail {
    fn new(trail: &Trail, catalog: &Catalog) -> Self {
        Self {
            id: trail.id.clone(),
            name: trail.name.clone(),
            icon: trail.icon().to_string(),
            tagline: trail.tagline.clone(),
            description: trail.description.clone(),
            duration: trail.duration.clone(),
            distance: trail.distance.clone(),
            stops: trail.stops.clone(),
            highlights: trail.highlights.clone(),
            best_for: trail.best_for.clone(),
            start_point: trail.start_point.clone(),
            coordinates: trail.coordinates,
            places: trail
                .related_place_ids
                .iter()
                .filter_map(|id| catalog.place(id))
                .map(|p| ApiEntityLink {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            artisans: trail
                .related_artisan_ids
                .iter()
                .filter_map(|id| catalog.artisan(id))
                .map(|a| ApiEntityLink {
                    id: a.id.clone(),
                    name: a.name.clone(),
                })
                .collect(),
            stop_count: trail.related_count(),
            selection: SelectionToken::Trail(trail.id.clone()).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiMapConfig {
    pub tile_url: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub center: LatLng,
    pub default_zoom: u8,
    pub focus_zoom: u8,
    pub max_zoom: u8,
    pub fit_padding_px: u32,
    pub show_artisans: bool,
}

#[derive(Serialize, Deserialize)]
pub struct ApiRecommendation {
    pub hour: u32,
    pub time_context: String,
    pub message: String,
    pub places: Vec<ApiPlace>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceQuery {
    pub category: Option<String>,
    pub crowd: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub selection: Option<String>,
    pub artisans: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub hour: Option<u32>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/places", get(get_places))
        .route("/places/{id}", get(get_place))
        .route("/artisans", get(get_artisans))
        .route("/artisans/{id}", get(get_artisan))
        .route("/trails", get(get_trails))
        .route("/trails/{id}", get(get_trail))
        .route("/map", get(get_map))
        .route("/map/config", get(get_map_config))
        .route("/map/tiles/{z}/{x}/{y}", get(get_tile))
        .route("/recommendations", get(get_recommendations))
        .with_state(state)
}

fn status_for(error: &TrailsError) -> StatusCode {
    match error {
        TrailsError::NotFound { .. } => StatusCode::NOT_FOUND,
        TrailsError::Validation { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(error: TrailsError) -> StatusCode {
    let status = status_for(&error);
    warn!(status = status.as_u16(), "{}", error.user_message());
    status
}

#[instrument(skip(state))]
async fn get_places(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<Vec<ApiPlace>>, StatusCode> {
    let category: CategoryFilter = query
        .category
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(reject)?;
    let crowd: CrowdFilter = query
        .crowd
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(reject)?;

    let places = listing::filter_places(&state.catalog.places, category, crowd);
    Ok(Json(places.into_iter().map(ApiPlace::from).collect()))
}

async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiPlaceDetail>, StatusCode> {
    let place = state.catalog.require_place(&id).map_err(reject)?;
    Ok(Json(ApiPlaceDetail::new(place, &state.catalog)))
}

async fn get_artisans(State(state): State<AppState>) -> Json<Vec<ApiArtisan>> {
    Json(state.catalog.artisans.iter().map(ApiArtisan::from).collect())
}

async fn get_artisan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiArtisan>, StatusCode> {
    let artisan = state.catalog.require_artisan(&id).map_err(reject)?;
    Ok(Json(ApiArtisan::from(artisan)))
}

async fn get_trails(State(state): State<AppState>) -> Json<Vec<ApiTrail>> {
    Json(
        state
            .catalog
            .trails
            .iter()
            .map(|trail| ApiTrail::new(trail, &state.catalog))
            .collect(),
    )
}

async fn get_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiTrail>, StatusCode> {
    let trail = state.catalog.require_trail(&id).map_err(reject)?;
    Ok(Json(ApiTrail::new(trail, &state.catalog)))
}

/// Map scene for one selection. Each request starts from a fresh annotator;
/// nothing about the visitor's selection is kept on the server.
#[instrument(skip(state))]
async fn get_map(State(state): State<AppState>, Query(query): Query<MapQuery>) -> Json<MapScene> {
    let mut annotator = MapAnnotator::new(&state.catalog, state.map.as_ref().clone());
    if let Some(show) = query.artisans {
        annotator.set_show_artisans(show);
    }
    if let Some(selection) = query.selection.as_deref().filter(|s| !s.trim().is_empty()) {
        annotator.select(&SelectionToken::parse(selection));
    }
    Json(annotator.scene())
}

async fn get_map_config(State(state): State<AppState>) -> Json<ApiMapConfig> {
    Json(ApiMapConfig {
        tile_url: state.tiles.url_template.clone(),
        subdomains: state.tiles.subdomains.clone(),
        attribution: state.tiles.attribution.clone(),
        center: state.map.center,
        default_zoom: state.map.default_zoom,
        focus_zoom: state.map.focus_zoom,
        max_zoom: state.tiles.max_zoom,
        fit_padding_px: state.map.fit_padding_px,
        show_artisans: state.map.show_artisans,
    })
}

async fn get_tile(
    State(state): State<AppState>,
    Path((z, x, y)): Path<(u8, u32, u32)>,
) -> Result<Redirect, StatusCode> {
    let tile = TileCoord::new(z, x, y, state.tiles.max_zoom).map_err(reject)?;
    Ok(Redirect::temporary(&state.tiles.tile_url(&tile)))
}

async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<ApiRecommendation>, StatusCode> {
    let recommendation = match query.hour {
        Some(hour) if hour > 23 => {
            return Err(reject(TrailsError::validation(format!(
                "hour must be between 0 and 23, got {hour}"
            ))));
        }
        Some(hour) => listing::recommend_for_hour(&state.catalog, hour),
        None => listing::recommend_now(&state.catalog),
    };

    Ok(Json(ApiRecommendation {
        hour: recommendation.hour,
        time_context: recommendation.time_context.to_string(),
        message: recommendation.message.to_string(),
        places: recommendation.places.into_iter().map(ApiPlace::from).collect(),
    }))
}
