//! HTTP server assembly — API routes, static assets, CORS.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::dossier::DossierWriter;
use crate::interview::routes::{InterviewRouteState, interview_routes};
use crate::interview::{InterviewManager, OnboardData, Pacer, TypingPacer};
use crate::workflows;

/// Shared state for the top-level API routes.
#[derive(Clone)]
struct AppState {
    dossier: DossierWriter,
}

/// GET /api/workflows
async fn list_workflows() -> impl IntoResponse {
    Json(workflows::catalog())
}

/// GET /api/workflows/{id}
async fn get_workflow(Path(id): Path<String>) -> impl IntoResponse {
    match workflows::find(&id) {
        Some(workflow) => Json(workflow).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("unknown workflow: {id}")})),
        )
            .into_response(),
    }
}

/// POST /api/process_onboarding
///
/// Direct submission of a finalized answer record. Writes a dossier and
/// reports where it landed.
async fn process_onboarding(
    State(state): State<AppState>,
    Json(record): Json<OnboardData>,
) -> impl IntoResponse {
    match state.dossier.write(&record).await {
        Ok(path) => Json(json!({
            "status": "success",
            "message": "Onboarding processed successfully",
            "output": format!("ONBOARDING_SUCCESS: Dossier created at {}", path.display()),
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("dossier write failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Dossier creation failed",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Build the full application router with real pacing.
pub fn app(config: &ServerConfig) -> Router {
    app_with_pacer(config, Arc::new(TypingPacer))
}

/// Router with an injectable pacer; tests pass `NoDelay`.
pub fn app_with_pacer(config: &ServerConfig, pacer: Arc<dyn Pacer>) -> Router {
    let dossier = DossierWriter::new(&config.dossier_dir);
    let manager = Arc::new(InterviewManager::new(
        pacer,
        config.pacing,
        dossier.clone(),
    ));

    Router::new()
        .route("/api/workflows", get(list_workflows))
        .route("/api/workflows/{id}", get(get_workflow))
        .route("/api/process_onboarding", post(process_onboarding))
        .with_state(AppState { dossier })
        .merge(interview_routes(InterviewRouteState { manager }))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
}
