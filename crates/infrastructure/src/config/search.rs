//! Roulette search tunables.

use application::DEFAULT_ATTEMPT_LIMIT;
use domain::{
    ReachabilityPolicy, TimeBudget,
    reachability::{HIGHWAY_SPEED_KMH, LOCAL_SPEED_KMH},
};
use serde::{Deserialize, Serialize};

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Reverse-geocode calls allowed per spin
    #[serde(default = "default_attempt_limit")]
    pub attempt_limit: u32,

    /// Assumed average speed with highways, km/h
    #[serde(default = "default_highway_speed")]
    pub highway_speed_kmh: f64,

    /// Assumed average speed on local roads, km/h
    #[serde(default = "default_local_speed")]
    pub local_speed_kmh: f64,

    /// Travel times offered in the selector
    #[serde(default = "default_time_options")]
    pub time_options_minutes: Vec<u32>,
}

const fn default_attempt_limit() -> u32 {
    DEFAULT_ATTEMPT_LIMIT
}

const fn default_highway_speed() -> f64 {
    HIGHWAY_SPEED_KMH
}

const fn default_local_speed() -> f64 {
    LOCAL_SPEED_KMH
}

fn default_time_options() -> Vec<u32> {
    TimeBudget::STANDARD_OPTIONS.to_vec()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            attempt_limit: default_attempt_limit(),
            highway_speed_kmh: default_highway_speed(),
            local_speed_kmh: default_local_speed(),
            time_options_minutes: default_time_options(),
        }
    }
}

impl SearchConfig {
    /// Reachability policy built from the configured speeds
    #[must_use]
    pub const fn policy(&self) -> ReachabilityPolicy {
        ReachabilityPolicy::new(self.highway_speed_kmh, self.local_speed_kmh)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.attempt_limit == 0 {
            return Err("search.attempt_limit must be at least 1".to_string());
        }
        for (name, speed) in [
            ("highway_speed_kmh", self.highway_speed_kmh),
            ("local_speed_kmh", self.local_speed_kmh),
        ] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(format!("search.{name} must be positive, got {speed}"));
            }
        }
        if self.time_options_minutes.is_empty() {
            return Err("search.time_options_minutes must not be empty".to_string());
        }
        for minutes in &self.time_options_minutes {
            TimeBudget::new(*minutes).map_err(|e| format!("search.time_options_minutes: {e}"))?;
        }
        Ok(())
    }
}
