pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::design::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Design API
        .route("/api/v1/designs/generate", post(handlers::handle_generate))
        .route("/api/v1/designs/catalog", get(handlers::handle_get_catalog))
        .route(
            "/api/v1/designs/catalog/:kind",
            get(handlers::handle_get_catalog_kind),
        )
        .with_state(state)
}
