//! Nominatim geocoding integration
//!
//! Resolves free-form addresses to coordinates and coordinates back to a
//! region/locality pair via [Nominatim](https://nominatim.openstreetmap.org)
//! (OpenStreetMap).
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the forward and reverse operations,
//! implemented by [`NominatimGeocodingClient`]. Every request carries the
//! configured `User-Agent`, which Nominatim's usage policy requires. There is
//! no caching and no rate limiting: each call is a single request.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let origin = client.geocode("東京駅").await?;
//! let place = client.reverse_geocode(&origin).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::{NominatimAddress, NominatimReverseResult, NominatimSearchResult};
