//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `search`: attempt limit, speeds, selectable travel times
//! - `map`: tiles, initial viewport, marker icon
//! - `ui`: message locale
//!
//! Nominatim settings come from [`integration_nominatim::NominatimConfig`] and
//! logging from [`crate::telemetry::TelemetryConfig`].

mod map;
mod search;
mod server;
mod ui;

use application::{ApplicationError, RouletteSettings};
use integration_nominatim::NominatimConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use map::MapConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
pub use ui::UiConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding service configuration
    #[serde(default)]
    pub nominatim: NominatimConfig,

    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Map configuration
    #[serde(default)]
    pub map: MapConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.toml` and the environment
    ///
    /// Environment variables use the `ROULETTE_` prefix and a double
    /// underscore between section and key, e.g. `ROULETTE_SERVER__PORT=8080`
    /// or `ROULETTE_SEARCH__ATTEMPT_LIMIT=8`. `ROULETTE_SERVER__ALLOWED_ORIGINS`
    /// takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(environment())
    }

    fn load_from(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(environment);

        let config = builder.build()?;
        let app_config: Self = config.try_deserialize()?;
        debug!(?app_config, "Configuration loaded");
        Ok(app_config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first bad field.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.nominatim
            .validate()
            .map_err(|e| format!("nominatim: {e}"))
            .and_then(|()| self.search.validate())
            .and_then(|()| self.map.validate())
            .map_err(ApplicationError::Configuration)
    }

    /// Roulette settings derived from the search and map sections
    #[must_use]
    pub fn roulette_settings(&self) -> RouletteSettings {
        RouletteSettings {
            policy: self.search.policy(),
            result_zoom: self.map.result_zoom,
            marker_icon: self.map.marker_icon_url.clone(),
        }
    }
}

/// `ROULETTE_<SECTION>__<KEY>`; single underscores stay inside key names
fn environment() -> config::Environment {
    config::Environment::with_prefix("ROULETTE")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("server.allowed_origins")
        .try_parsing(true)
}
