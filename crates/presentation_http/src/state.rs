//! Application state shared across handlers

use std::{fmt, sync::Arc};

use application::{ApplicationError, RouletteService};
use infrastructure::{AppConfig, LeafletMapView};
use parking_lot::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Roulette use cases
    pub roulette_service: Arc<RouletteService>,
    /// The map every result is drawn on
    ///
    /// Locked only after a search has finished, never across an `.await`.
    pub map_view: Arc<Mutex<LeafletMapView>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("roulette_service", &self.roulette_service)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the state with the map at its configured initial view
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the initial map centre is invalid.
    pub fn new(
        roulette_service: Arc<RouletteService>,
        config: Arc<AppConfig>,
    ) -> Result<Self, ApplicationError> {
        let center = config
            .map
            .initial_center()
            .map_err(ApplicationError::Configuration)?;
        let map_view = LeafletMapView::new(center, config.map.initial_zoom, config.map.max_zoom);

        Ok(Self {
            roulette_service,
            map_view: Arc::new(Mutex::new(map_view)),
            config,
        })
    }
}
