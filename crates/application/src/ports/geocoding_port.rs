//! Geocoding port
//!
//! Forward (address to coordinates) and reverse (coordinates to place name)
//! lookups against an external geocoding service.

use async_trait::async_trait;
use domain::{Coordinate, PlaceName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text address to its first match
    ///
    /// # Errors
    ///
    /// `NotFound` when the service has no match, `Network` on transport or
    /// parse failure.
    async fn forward_geocode(&self, address: &str) -> Result<Coordinate, ApplicationError>;

    /// Resolve a point to a place name
    ///
    /// A point without an address is not an error: it yields
    /// [`PlaceName::unresolved`].
    ///
    /// # Errors
    ///
    /// `Network` on transport or parse failure.
    async fn reverse_geocode(&self, point: Coordinate) -> Result<PlaceName, ApplicationError>;
}
