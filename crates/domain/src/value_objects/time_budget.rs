//! Travel time budget

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// How long the user is willing to travel, in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeBudget(u32);

impl TimeBudget {
    /// The shortest option offered by the time selector
    pub const SHORTEST_MINUTES: u32 = 30;

    /// Upper bound accepted for a single trip (one day)
    pub const MAX_MINUTES: u32 = 24 * 60;

    /// Options offered by the time selector
    pub const STANDARD_OPTIONS: [u32; 4] = [30, 60, 90, 120];

    /// Create a validated time budget
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeBudget` for zero or more than a day.
    pub fn new(minutes: u32) -> Result<Self, DomainError> {
        if minutes == 0 || minutes > Self::MAX_MINUTES {
            return Err(DomainError::InvalidTimeBudget(minutes));
        }
        Ok(Self(minutes))
    }

    /// Minutes in this budget
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Budget expressed in hours
    #[must_use]
    pub fn hours(self) -> f64 {
        f64::from(self.0) / 60.0
    }
}

impl TryFrom<u32> for TimeBudget {
    type Error = DomainError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<TimeBudget> for u32 {
    fn from(budget: TimeBudget) -> Self {
        budget.0
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
