mod config;
mod errors;
mod matches;
mod models;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::matches::store::{FileMatchStore, MatchStore, MemoryMatchStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn MatchStore> = match config.store_backend {
        StoreBackend::File => {
            let file_store = FileMatchStore::new(config.results_path.clone());
            info!("Match store: file at {}", file_store.path().display());
            Arc::new(file_store)
        }
        StoreBackend::Memory => {
            info!("Match store: in-memory");
            Arc::new(MemoryMatchStore::new())
        }
    };
    info!("Keeping the top {} matches per batch", config.match_limit);

    let state = AppState {
        config: config.clone(),
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
