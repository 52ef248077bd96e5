//! Geocoding adapter - Implements GeocodingPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{Coordinate, PlaceName};
use integration_nominatim::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{instrument, warn};

/// Adapter for forward and reverse geocoding through Nominatim
#[derive(Debug)]
pub struct NominatimGeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl NominatimGeocodingAdapter {
    /// Wrap an existing client
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Build the client from configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the client cannot be created.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        NominatimGeocodingClient::new(config)
            .map(Self::new)
            .map_err(map_error)
    }
}

/// Map integration errors onto the application taxonomy
fn map_error(error: GeocodingError) -> ApplicationError {
    match error {
        GeocodingError::AddressNotFound(address) => ApplicationError::NotFound(address),
        GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::Network(other.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn forward_geocode(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        self.client.geocode(address).await.map_err(|e| {
            warn!(%address, error = %e, "Failed to geocode address");
            map_error(e)
        })
    }

    #[instrument(skip(self, point), fields(point = %point))]
    async fn reverse_geocode(&self, point: Coordinate) -> Result<PlaceName, ApplicationError> {
        self.client.reverse_geocode(&point).await.map_err(|e| {
            warn!(error = %e, "Reverse geocoding failed");
            map_error(e)
        })
    }
}
