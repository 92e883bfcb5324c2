use std::sync::Arc;

use crate::design::library::DesignLibrary;
use crate::design::scoring::DesignScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog and base color schemes. Built and validated once at startup; read-only.
    pub library: Arc<DesignLibrary>,
    /// Pluggable design scorer. Default: HeuristicScorer.
    pub scorer: Arc<dyn DesignScorer>,
}
