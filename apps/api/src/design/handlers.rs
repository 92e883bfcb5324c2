//! Axum route handlers for the Design API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::design::catalog::{Organism, SectionKind};
use crate::design::generator::{generate, GenerateRequest, GeneratedTemplate};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub version: String,
    pub counts: BTreeMap<SectionKind, usize>,
    pub organisms: Vec<Organism>,
}

#[derive(Debug, Serialize)]
pub struct CatalogKindResponse {
    pub kind: SectionKind,
    pub organisms: Vec<Organism>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/designs/generate
///
/// Generates a complete design for the profile. Supplying a previously
/// returned `metadata.seed` with the same profile and options regenerates the
/// same design.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedTemplate>, AppError> {
    if request.base_template_name.trim().is_empty() {
        return Err(AppError::Validation(
            "base_template_name cannot be empty".to_string(),
        ));
    }

    let template = generate(&state.library, state.scorer.as_ref(), &request)?;
    Ok(Json(template))
}

/// GET /api/v1/designs/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = &state.library.catalog;
    Json(CatalogResponse {
        version: catalog.version.clone(),
        counts: catalog.counts(),
        organisms: catalog.organisms.clone(),
    })
}

/// GET /api/v1/designs/catalog/:kind
pub async fn handle_get_catalog_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<CatalogKindResponse>, AppError> {
    let kind: SectionKind = kind.parse().map_err(AppError::NotFound)?;
    if !kind.is_catalog_backed() {
        return Err(AppError::NotFound(format!("'{kind}' has no catalog organisms")));
    }
    let organisms = state
        .library
        .catalog
        .by_kind(kind)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(CatalogKindResponse { kind, organisms }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::design::library::DesignLibrary;
    use crate::design::scoring::HeuristicScorer;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn state() -> AppState {
        AppState {
            library: Arc::new(DesignLibrary::builtin("test-1")),
            scorer: Arc::new(HeuristicScorer),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_generate(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/designs/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_template_with_seed() {
        let (status, body) = send(post_generate(json!({
            "base_template_name": "Modern",
            "profile": {"profession": "Senior Developer", "industry": "technology"},
            "seed": "xyz123"
        })))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["seed"], "xyz123");
        assert_eq!(body["metadata"]["taste_category"], "professional");
        assert!(body["customization"]["colors"]["primary"]
            .as_str()
            .unwrap()
            .starts_with('#'));
        let performance = body["metadata"]["performance_score"].as_u64().unwrap();
        assert!((70..=100).contains(&performance));
    }

    #[tokio::test]
    async fn test_generate_is_reproducible_over_http() {
        let request = json!({
            "base_template_name": "Modern",
            "profile": {"profession": "Designer", "industry": "fashion"},
            "options": {"randomize_colors": true},
            "seed": "replay"
        });
        let (_, first) = send(post_generate(request.clone())).await;
        let (_, second) = send(post_generate(request)).await;
        assert_eq!(first["customization"], second["customization"]);
        assert_eq!(first["metadata"], second["metadata"]);
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_template_name() {
        let (status, body) = send(post_generate(json!({
            "base_template_name": "   ",
            "profile": {}
        })))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_catalog_lists_all_organisms() {
        let (status, body) = send(get("/api/v1/designs/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "test-1");
        assert_eq!(body["organisms"].as_array().unwrap().len(), 50);
        assert_eq!(body["counts"]["hero"], 8);
    }

    #[tokio::test]
    async fn test_catalog_kind_filters_and_rejects_unknown() {
        let (status, body) = send(get("/api/v1/designs/catalog/contact")).await;
        assert_eq!(status, StatusCode::OK);
        let organisms = body["organisms"].as_array().unwrap();
        assert!(!organisms.is_empty());
        assert!(organisms.iter().all(|o| o["kind"] == "contact"));

        let (status, body) = send(get("/api/v1/designs/catalog/sidebar")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_catalog_kind_rejects_kinds_without_organisms() {
        let (status, body) = send(get("/api/v1/designs/catalog/showcase3d")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
