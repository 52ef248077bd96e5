//! Map settings handler
//!
//! Everything the page needs to build the Leaflet map and the form: tiles,
//! marker icon, the current view, and the selectable travel times.

use application::{Locale, time_option_label};
use axum::{Json, extract::State};
use domain::{HighwayControl, RoadPreference};
use infrastructure::MapSnapshot;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Marker icon geometry, in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerIcon {
    /// Icon image location
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Icon pixel placed on the point, from the left edge
    pub anchor_x: u32,
    /// Icon pixel placed on the point, from the top edge
    pub anchor_y: u32,
}

/// One entry of the travel-time selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOption {
    /// Value submitted with the search
    pub minutes: u32,
    /// Localized label, e.g. "1 hour" or "1時間"
    pub label: String,
}

/// Response for `GET /v1/map`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettingsResponse {
    /// Leaflet tile URL template
    pub tile_url: String,
    /// Attribution shown in the map corner
    pub attribution: String,
    /// Highest zoom the tile layer allows
    pub max_zoom: u8,
    /// Result marker icon
    pub marker_icon: MarkerIcon,
    /// Current viewport and marker
    pub view: MapSnapshot,
    /// Travel-time selector entries in display order
    pub time_options: Vec<TimeOption>,
    /// Highway selector state for the first time option
    pub highway: HighwayControl,
    /// Language of the labels and messages
    pub locale: Locale,
}

/// Map, marker and form settings plus the current view
pub async fn map_settings(State(state): State<AppState>) -> Json<MapSettingsResponse> {
    let config = &state.config;
    let locale = config.ui.locale;

    let time_options: Vec<TimeOption> = config
        .search
        .time_options_minutes
        .iter()
        .map(|&minutes| TimeOption {
            minutes,
            label: time_option_label(minutes, locale),
        })
        .collect();

    let first_minutes = time_options.first().map_or(0, |option| option.minutes);
    let highway = state
        .roulette_service
        .highway_control(first_minutes, RoadPreference::default());

    let view = state.map_view.lock().snapshot();

    Json(MapSettingsResponse {
        tile_url: config.map.tile_url.clone(),
        attribution: config.map.attribution.clone(),
        max_zoom: config.map.max_zoom,
        marker_icon: MarkerIcon {
            url: config.map.marker_icon_url.clone(),
            width: config.map.marker_width,
            height: config.map.marker_height,
            anchor_x: config.map.marker_anchor_x,
            anchor_y: config.map.marker_anchor_y,
        },
        view,
        time_options,
        highway,
        locale,
    })
}
