//! Ports - Interfaces for external dependencies
//!
//! These traits define the boundaries between the application layer
//! and the outside world (geocoding service, map surface).

mod geocoding_port;
mod map_view_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use map_view_port::MapViewPort;
#[cfg(test)]
pub use map_view_port::MockMapViewPort;
