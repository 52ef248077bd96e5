//! Raw Nominatim response models

use domain::PlaceName;
use serde::Deserialize;

/// One entry of a `/search` response
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimSearchResult {
    /// Latitude, sent as a decimal string
    pub lat: String,
    /// Longitude, sent as a decimal string
    pub lon: String,
    /// Full name of the match, logged to show what the query resolved to
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A `/reverse` response
///
/// Points that fall on water come back as `{"error": "Unable to geocode"}`
/// with status 200, so both fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimReverseResult {
    #[serde(default)]
    pub address: Option<NominatimAddress>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Address breakdown of a reverse result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    pub state: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub county: Option<String>,
}

fn first_present<'a>(candidates: impl IntoIterator<Item = &'a Option<String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

impl NominatimAddress {
    /// Prefecture/state level name
    #[must_use]
    pub fn region(&self) -> String {
        first_present([&self.state, &self.province])
    }

    /// City-or-smaller name
    #[must_use]
    pub fn locality(&self) -> String {
        first_present([
            &self.city,
            &self.town,
            &self.village,
            &self.municipality,
            &self.county,
        ])
    }
}

impl NominatimReverseResult {
    /// Collapse the response into a place name
    ///
    /// Error payloads and missing addresses yield [`PlaceName::unresolved`].
    #[must_use]
    pub fn into_place_name(self) -> PlaceName {
        if self.error.is_some() {
            return PlaceName::unresolved();
        }
        self.address.map_or_else(PlaceName::unresolved, |address| {
            PlaceName::new(address.region(), address.locality())
        })
    }
}
