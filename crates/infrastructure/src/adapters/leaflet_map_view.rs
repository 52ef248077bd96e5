//! Leaflet map view - Implements MapViewPort as a serialisable map state
//!
//! The browser page owns the actual Leaflet map. This adapter keeps the
//! viewport and the single marker on the server side and hands the page a
//! [`MapSnapshot`] to apply: `setView(center, zoom)`, remove the old marker,
//! add the new one.

use application::ports::MapViewPort;
use domain::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A marker on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Where the marker sits
    pub position: Coordinate,
    /// Icon reference passed by the caller
    pub icon: String,
}

/// What the page should display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// Viewport centre
    pub center: Coordinate,
    /// Viewport zoom, never above the view's maximum
    pub zoom: u8,
    /// The result marker, if a spot has been shown
    pub marker: Option<Marker>,
}

/// Viewport and at most one marker
#[derive(Debug, Clone)]
pub struct LeafletMapView {
    center: Coordinate,
    zoom: u8,
    max_zoom: u8,
    marker: Option<Marker>,
}

impl LeafletMapView {
    /// Create a view with no marker
    ///
    /// Zoom levels above `max_zoom` are clamped.
    pub fn new(center: Coordinate, zoom: u8, max_zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.min(max_zoom),
            max_zoom,
            marker: None,
        }
    }

    pub const fn center(&self) -> Coordinate {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub const fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Current state for the page
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            center: self.center,
            zoom: self.zoom,
            marker: self.marker.clone(),
        }
    }
}

impl MapViewPort for LeafletMapView {
    fn recenter(&mut self, point: Coordinate, zoom: u8) {
        self.center = point;
        self.zoom = zoom.min(self.max_zoom);
        debug!(center = %self.center, zoom = self.zoom, "Map recentered");
    }

    fn place_marker(&mut self, point: Coordinate, icon_ref: &str) {
        if let Some(previous) = self.marker.replace(Marker {
            position: point,
            icon: icon_ref.to_string(),
        }) {
            debug!(previous = %previous.position, "Replaced marker");
        }
    }
}
