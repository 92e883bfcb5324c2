mod config;
mod design;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::design::library::DesignLibrary;
use crate::design::scoring::{DesignScorer, HeuristicScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio design API v{}", env!("CARGO_PKG_VERSION"));

    // Build the static design library once and refuse to serve broken tables
    let library = DesignLibrary::builtin(&config.catalog_version);
    library.validate()?;
    info!(
        "Design library loaded: catalog {} with {} organisms",
        library.catalog.version,
        library.catalog.organisms.len()
    );

    let scorer: Arc<dyn DesignScorer> = Arc::new(HeuristicScorer);
    info!("Design scorer initialized (backend: {})", scorer.backend());

    // Build app state
    let state = AppState {
        library: Arc::new(library),
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the dashboard host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
