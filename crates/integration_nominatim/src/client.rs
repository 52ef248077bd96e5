//! Nominatim HTTP client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, PlaceName};
use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::{NominatimReverseResult, NominatimSearchResult};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;

    /// Convert coordinates to a region/locality pair
    ///
    /// Points with no address (open water, unmapped areas) resolve to
    /// [`PlaceName::unresolved`] rather than an error.
    async fn reverse_geocode(&self, point: &Coordinate) -> Result<PlaceName, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn language_param(&self) -> Option<(&'static str, String)> {
        let lang = self.config.accept_language.trim();
        (!lang.is_empty()).then(|| ("accept-language", lang.to_string()))
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Response, GeocodingError> {
        let response = self
            .client
            .get(self.config.endpoint(path))
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let mut params = vec![
            ("format", "json".to_string()),
            ("q", address.to_string()),
            ("limit", "1".to_string()),
        ];
        params.extend(self.language_param());

        debug!(%address, "Geocoding address");

        let body = self.get("search", &params).await?.text().await?;
        let results: Vec<NominatimSearchResult> =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;

        debug!(
            %address,
            %lat,
            %lon,
            matched = result.display_name.as_deref().unwrap_or_default(),
            "Geocoded address"
        );

        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    #[instrument(skip(self, point), fields(point = %point))]
    async fn reverse_geocode(&self, point: &Coordinate) -> Result<PlaceName, GeocodingError> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("lat", point.latitude().to_string()),
            ("lon", point.longitude().to_string()),
        ];
        params.extend(self.language_param());

        let body = self.get("reverse", &params).await?.text().await?;
        let result: NominatimReverseResult =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if let Some(reason) = &result.error {
            debug!(%reason, "No address at point");
        }

        let place = result.into_place_name();
        debug!(region = %place.region, locality = %place.locality, "Reverse geocoded");
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = NominatimConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        let result = NominatimGeocodingClient::new(&config);
        assert!(matches!(result, Err(GeocodingError::ConfigurationError(_))));
    }

    #[test]
    fn test_language_param() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::default()).unwrap();
        assert!(client.language_param().is_none());

        let config = NominatimConfig {
            accept_language: "ja".to_string(),
            ..Default::default()
        };
        let client = NominatimGeocodingClient::new(&config).unwrap();
        assert_eq!(
            client.language_param(),
            Some(("accept-language", "ja".to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_address_fails_without_request() {
        // Nothing listens on this port; an attempted request would be ConnectionFailed
        let client =
            NominatimGeocodingClient::new(&NominatimConfig::for_testing("http://127.0.0.1:9"))
                .unwrap();
        let result = client.geocode("   ").await;
        assert!(matches!(result, Err(GeocodingError::AddressNotFound(_))));
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn _assert(_: &dyn GeocodingClient) {}
    }
}
