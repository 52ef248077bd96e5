//! Travel-time to distance conversion
//!
//! The speeds are policy, not physics: they are average door-to-door
//! speeds used to turn a time budget into a search radius.

use serde::{Deserialize, Serialize};

use crate::value_objects::{RoadPreference, TimeBudget};

/// Average speed when highways are allowed
pub const HIGHWAY_SPEED_KMH: f64 = 80.0;

/// Average speed on local roads only
pub const LOCAL_SPEED_KMH: f64 = 40.0;

/// Average speeds used to estimate how far a time budget reaches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReachabilityPolicy {
    /// Average speed in km/h when highways are allowed
    pub highway_speed_kmh: f64,
    /// Average speed in km/h on local roads
    pub local_speed_kmh: f64,
}

impl Default for ReachabilityPolicy {
    fn default() -> Self {
        Self {
            highway_speed_kmh: HIGHWAY_SPEED_KMH,
            local_speed_kmh: LOCAL_SPEED_KMH,
        }
    }
}

impl ReachabilityPolicy {
    /// Create a policy with custom speeds
    #[must_use]
    pub const fn new(highway_speed_kmh: f64, local_speed_kmh: f64) -> Self {
        Self {
            highway_speed_kmh,
            local_speed_kmh,
        }
    }

    /// Speed for the given road preference
    #[must_use]
    pub const fn speed_kmh(&self, preference: RoadPreference) -> f64 {
        match preference {
            RoadPreference::Highway => self.highway_speed_kmh,
            RoadPreference::LocalRoads => self.local_speed_kmh,
        }
    }

    /// Maximum straight-line distance reachable within the budget
    #[must_use]
    pub fn max_distance_km(&self, budget: TimeBudget, preference: RoadPreference) -> f64 {
        (budget.hours() * self.speed_kmh(preference)).max(0.0)
    }
}
