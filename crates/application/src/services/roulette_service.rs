//! Roulette service
//!
//! One spin: validate the form, geocode the origin, derive the reachable
//! radius, let the [`SpotFinder`] pick a spot, and show it on the map.

use std::{fmt, sync::Arc};

use domain::{
    HighwayControl, ReachabilityPolicy, RoadPreference, SearchRequest, SearchResult, TimeBudget,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, MapViewPort},
    services::SpotFinder,
};

/// Raw user input for one spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    /// Origin address as typed
    pub origin: String,
    /// Selected travel time in minutes
    pub time_minutes: u32,
    /// Selected road preference before the control rule is applied
    pub road_preference: RoadPreference,
}

/// A successful spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Resolved origin and radius after the control rule
    pub request: SearchRequest,
    /// The spot that was found
    pub result: SearchResult,
}

/// Tunables for the roulette
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteSettings {
    /// Speeds used to turn minutes into a radius
    pub policy: ReachabilityPolicy,
    /// Zoom level used when showing a result
    pub result_zoom: u8,
    /// Icon reference passed to the map for the result marker
    pub marker_icon: String,
}

impl Default for RouletteSettings {
    fn default() -> Self {
        Self {
            policy: ReachabilityPolicy::default(),
            result_zoom: 12,
            marker_icon: "/assets/marker.svg".to_string(),
        }
    }
}

/// Orchestrates a destination roulette spin
pub struct RouletteService {
    geocoder: Arc<dyn GeocodingPort>,
    spot_finder: SpotFinder,
    settings: RouletteSettings,
}

impl fmt::Debug for RouletteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouletteService")
            .field("spot_finder", &self.spot_finder)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl RouletteService {
    /// Create a new roulette service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        spot_finder: SpotFinder,
        settings: RouletteSettings,
    ) -> Self {
        Self {
            geocoder,
            spot_finder,
            settings,
        }
    }

    /// Settings this service was built with
    pub const fn settings(&self) -> &RouletteSettings {
        &self.settings
    }

    /// State of the highway selector for a given time selection
    pub const fn highway_control(&self, minutes: u32, current: RoadPreference) -> HighwayControl {
        HighwayControl::for_minutes(minutes, current)
    }

    /// Run one spin
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty origin, before any remote call
    /// - `Domain` for an out-of-range time budget
    /// - `NotFound` when the origin cannot be geocoded; no spot search runs
    /// - `Network` on any geocoding transport failure
    /// - `ExhaustedRetries` when no candidate landed on land
    #[instrument(skip(self, form), fields(time_minutes = form.time_minutes))]
    pub async fn spin(&self, form: SearchForm) -> Result<SearchOutcome, ApplicationError> {
        let origin_address = form.origin.trim();
        if origin_address.is_empty() {
            return Err(ApplicationError::Validation(
                "origin address must not be empty".to_string(),
            ));
        }

        let time_budget = TimeBudget::new(form.time_minutes)?;
        let control = HighwayControl::for_time_budget(time_budget, form.road_preference);
        if control.value != form.road_preference {
            info!("Short trip, switching to local roads");
        }

        let origin = self
            .geocoder
            .forward_geocode(origin_address)
            .await
            .inspect_err(|e| warn!(error = %e, "Origin lookup failed"))?;

        let request = SearchRequest::new(
            origin_address,
            origin,
            time_budget,
            control.value,
            &self.settings.policy,
        );
        info!(
            search_id = %request.id,
            origin = %request.origin,
            road_preference = %request.road_preference,
            max_distance_km = request.max_distance_km,
            "Spinning the roulette"
        );

        let result = self
            .spot_finder
            .find_reachable_spot(request.origin, request.max_distance_km)
            .await?;

        info!(search_id = %request.id, place = %result.place, "Roulette landed");
        Ok(SearchOutcome { request, result })
    }

    /// Show a spin result on the map
    pub fn display(&self, outcome: &SearchOutcome, map: &mut dyn MapViewPort) {
        let point = outcome.result.point;
        map.recenter(point, self.settings.result_zoom);
        map.place_marker(point, &self.settings.marker_icon);
    }
}
