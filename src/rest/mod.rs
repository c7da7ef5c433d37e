use std::{net::SocketAddr, sync::Arc, time::SystemTime};

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::source::RecordSource;

mod handlers;
pub mod models;

use handlers::{health, list_repos, not_found};

pub struct AppState<S: RecordSource> {
    pub source: Arc<S>,
    pub started_at: SystemTime,
}

impl<S: RecordSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            started_at: self.started_at,
        }
    }
}

/// Proxy routes with an unrestricted `Access-Control-Allow-Origin`.
pub fn router<S: RecordSource + Send + Sync + 'static>(source: Arc<S>) -> Router {
    let state = AppState {
        source,
        started_at: SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health::<S>))
        .route("/api/repos", get(list_repos::<S>))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve<S: RecordSource + Send + Sync + 'static>(
    addr: SocketAddr,
    source: Arc<S>,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    log::info!("🛰️ Proxying {}", source.describe());
    let app = router(source);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
