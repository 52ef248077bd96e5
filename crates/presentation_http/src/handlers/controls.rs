//! Form control handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{HighwayControl, RoadPreference};
use serde::Deserialize;

use crate::state::AppState;

/// Query for `GET /v1/controls/highway`
#[derive(Debug, Clone, Deserialize)]
pub struct HighwayControlQuery {
    pub time_minutes: u32,
    /// Current selector value (`yes`/`no`)
    #[serde(default)]
    pub highway: RoadPreference,
}

/// Highway selector state for the selected travel time
pub async fn highway_control(
    State(state): State<AppState>,
    Query(query): Query<HighwayControlQuery>,
) -> Json<HighwayControl> {
    Json(
        state
            .roulette_service
            .highway_control(query.time_minutes, query.highway),
    )
}
