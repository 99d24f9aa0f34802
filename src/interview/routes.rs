//! REST endpoints for driving interview sessions.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use super::manager::InterviewManager;

/// Shared state for interview routes.
#[derive(Clone)]
pub struct InterviewRouteState {
    pub manager: Arc<InterviewManager>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    text: String,
}

/// POST /api/interview
///
/// Starts a session and returns its id plus the opening prompt.
async fn start_interview(State(state): State<InterviewRouteState>) -> impl IntoResponse {
    let (id, messages) = state.manager.start().await;
    Json(serde_json::json!({
        "session_id": id,
        "messages": messages,
    }))
}

/// POST /api/interview/{id}/message
async fn post_message(
    State(state): State<InterviewRouteState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MessageBody>,
) -> impl IntoResponse {
    match state.manager.submit(id, &body.text).await {
        Ok(turn) => Json(turn).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// GET /api/interview/{id}
async fn get_status(
    State(state): State<InterviewRouteState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.manager.status(id).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Build the interview REST routes.
pub fn interview_routes(state: InterviewRouteState) -> Router {
    Router::new()
        .route("/api/interview", post(start_interview))
        .route("/api/interview/{id}", get(get_status))
        .route("/api/interview/{id}/message", post(post_message))
        .with_state(state)
}
