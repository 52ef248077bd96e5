//! Spot finder
//!
//! Draws random points inside the reachable disk and reverse-geocodes them
//! one at a time until one lands somewhere with a region.

use std::{fmt, sync::Arc};

use domain::{Coordinate, SearchResult, haversine_distance_km, random_point_within};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::GeocodingPort};

/// Reverse-geocode calls allowed per search
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 16;

/// Finds a random point on land within a radius
pub struct SpotFinder {
    geocoder: Arc<dyn GeocodingPort>,
    attempt_limit: u32,
    rng: Mutex<StdRng>,
}

impl fmt::Debug for SpotFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotFinder")
            .field("attempt_limit", &self.attempt_limit)
            .finish_non_exhaustive()
    }
}

impl SpotFinder {
    /// Create a spot finder seeded from the OS
    ///
    /// An `attempt_limit` of zero is raised to one.
    pub fn new(geocoder: Arc<dyn GeocodingPort>, attempt_limit: u32) -> Self {
        Self::with_rng(geocoder, attempt_limit, StdRng::from_os_rng())
    }

    /// Create a spot finder with a fixed seed
    pub fn with_seed(geocoder: Arc<dyn GeocodingPort>, attempt_limit: u32, seed: u64) -> Self {
        Self::with_rng(geocoder, attempt_limit, StdRng::seed_from_u64(seed))
    }

    fn with_rng(geocoder: Arc<dyn GeocodingPort>, attempt_limit: u32, rng: StdRng) -> Self {
        Self {
            geocoder,
            attempt_limit: attempt_limit.max(1),
            rng: Mutex::new(rng),
        }
    }

    /// Maximum number of reverse-geocode calls per search
    pub const fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    fn draw(&self, origin: &Coordinate, max_distance_km: f64) -> Coordinate {
        let mut rng = self.rng.lock();
        random_point_within(origin, max_distance_km, &mut *rng)
    }

    /// Find a random point within `max_distance_km` of `origin` that
    /// reverse-geocodes to a place with a region
    ///
    /// Attempts are strictly sequential and each draw is independent of the
    /// previous one.
    ///
    /// # Errors
    ///
    /// `Network` as soon as a reverse geocode fails; `ExhaustedRetries` when
    /// every attempt came back without a region.
    #[instrument(skip(self, origin), fields(origin = %origin))]
    pub async fn find_reachable_spot(
        &self,
        origin: Coordinate,
        max_distance_km: f64,
    ) -> Result<SearchResult, ApplicationError> {
        for attempt in 1..=self.attempt_limit {
            let point = self.draw(&origin, max_distance_km);
            debug!(attempt, %point, "Reverse geocoding candidate");

            let place = self.geocoder.reverse_geocode(point).await?;
            if place.is_resolved() {
                let distance_km = haversine_distance_km(&origin, &point);
                info!(attempt, %place, distance_km, "Found reachable spot");
                return Ok(SearchResult {
                    point,
                    place,
                    distance_km,
                    attempts: attempt,
                });
            }

            debug!(attempt, "Candidate has no region");
        }

        warn!(attempts = self.attempt_limit, "Every candidate landed off the map");
        Err(ApplicationError::ExhaustedRetries {
            attempts: self.attempt_limit,
        })
    }
}
