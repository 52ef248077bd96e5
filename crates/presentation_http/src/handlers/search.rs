//! Roulette search handler

use application::{ResultSummary, SearchForm, result_summary};
use axum::{Json, extract::State};
use domain::{Coordinate, PlaceName, RoadPreference, SearchId};
use infrastructure::MapSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /v1/search`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequestBody {
    /// Origin address; blank is rejected by the roulette itself
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub origin: String,
    pub time_minutes: u32,
    #[serde(default)]
    pub highway: RoadPreference,
}

impl From<SearchRequestBody> for SearchForm {
    fn from(body: SearchRequestBody) -> Self {
        Self {
            origin: body.origin,
            time_minutes: body.time_minutes,
            road_preference: body.highway,
        }
    }
}

/// Response of a successful search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_id: SearchId,
    pub origin: Coordinate,
    pub point: Coordinate,
    pub place: PlaceName,
    pub distance_km: f64,
    pub attempts: u32,
    pub time_minutes: u32,
    /// Road preference actually used
    pub highway: RoadPreference,
    pub summary: ResultSummary,
    /// Map state after the result was drawn
    pub map: MapSnapshot,
}

/// Spin the roulette and draw the result on the map
#[instrument(skip(state, body), fields(time_minutes = body.time_minutes, highway = %body.highway))]
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SearchRequestBody>,
) -> Result<Json<SearchResponse>, ApiError> {
    let locale = state.config.ui.locale;

    let outcome = state
        .roulette_service
        .spin(body.into())
        .await
        .map_err(|e| ApiError::from_application(&e, locale))?;

    let map = {
        let mut view = state.map_view.lock();
        state.roulette_service.display(&outcome, &mut *view);
        view.snapshot()
    };

    let summary = result_summary(&outcome, locale);
    info!(search_id = %outcome.request.id, headline = %summary.headline, "Search complete");

    Ok(Json(SearchResponse {
        search_id: outcome.request.id,
        origin: outcome.request.origin,
        point: outcome.result.point,
        place: outcome.result.place,
        distance_km: outcome.result.distance_km,
        attempts: outcome.result.attempts,
        time_minutes: outcome.request.time_budget.minutes(),
        highway: outcome.request.road_preference,
        summary,
        map,
    }))
}
