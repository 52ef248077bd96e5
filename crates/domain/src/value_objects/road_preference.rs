//! Road-type preference for a search

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the trip may use highways
///
/// Serialized as `"yes"` / `"no"`, matching the values of the highway selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoadPreference {
    /// Highways allowed
    #[serde(rename = "yes")]
    Highway,
    /// Local roads only
    #[default]
    #[serde(rename = "no")]
    LocalRoads,
}

impl RoadPreference {
    /// Selector value (`"yes"` or `"no"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Highway => "yes",
            Self::LocalRoads => "no",
        }
    }
}

impl fmt::Display for RoadPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
