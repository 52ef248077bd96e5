//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Nominatim geocoding adapter, the map view state,
//! configuration loading, and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, MapConfig, SearchConfig, ServerConfig, UiConfig};
pub use telemetry::{LogFormat, TelemetryConfig, init_tracing};
