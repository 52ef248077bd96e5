//! Human-readable place name returned by reverse geocoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved place: the region (state, prefecture, province) and the
/// locality (city, town, village) inside it
///
/// An empty region means the point could not be resolved to a land
/// location. That sentinel is the only validity test the roulette uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    /// State, prefecture, or province; empty when unresolved
    pub region: String,
    /// City, town, village, municipality, or county; may be empty
    pub locality: String,
}

impl PlaceName {
    /// Create a place name
    pub fn new(region: impl Into<String>, locality: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            locality: locality.into(),
        }
    }

    /// The unresolved place (ocean, uninhabited, or outside coverage)
    #[must_use]
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Whether this place counts as a land location
    ///
    /// Only the region is consulted. A locality without a region is still
    /// unresolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.region.is_empty()
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.region, self.locality)
    }
}
