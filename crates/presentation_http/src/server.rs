//! Serving with a bounded graceful shutdown

use std::{future::Future, future::IntoFuture, io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain in-flight requests
///
/// Requests still running `grace` after the signal are dropped.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let notify = Arc::clone(&draining);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            info!("Waiting up to {:?} for in-flight searches to finish...", grace);
            notify.notify_one();
        })
        .into_future();

    tokio::select! {
        result = server => result,
        () = async {
            draining.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(?grace, "Shutdown grace period elapsed, dropping in-flight requests");
            Ok(())
        }
    }
}
