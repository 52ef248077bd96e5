//! Destination roulette HTTP server
//!
//! Main entry point for the page and its JSON API.

use std::sync::Arc;

use application::{GeocodingPort, RouletteService, SpotFinder};
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, NominatimGeocodingAdapter, init_tracing};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config.telemetry)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!("Destination roulette v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        nominatim = %config.nominatim.base_url,
        attempt_limit = config.search.attempt_limit,
        locale = %config.ui.locale,
        "Configuration loaded"
    );

    // Geocoding adapter shared by the origin lookup and the spot finder
    let geocoder: Arc<dyn GeocodingPort> =
        Arc::new(NominatimGeocodingAdapter::from_config(&config.nominatim)?);

    let spot_finder = SpotFinder::new(Arc::clone(&geocoder), config.search.attempt_limit);
    let roulette_service =
        RouletteService::new(geocoder, spot_finder, config.roulette_settings());

    let config = Arc::new(config);
    let state = AppState::new(Arc::new(roulette_service), Arc::clone(&config))?;

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    server::serve(listener, app, shutdown_signal(), config.server.shutdown_timeout()).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
