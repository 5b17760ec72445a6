use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::core::errors::ApiError;
use crate::state::AppState;

pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (session_id, _) = state.sessions.create();
    Json(json!({ "session_id": session_id }))
}

pub async fn get_session_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transcript = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    let transcript = transcript.lock().await;
    Ok(Json(json!({
        "session_id": session_id,
        "messages": transcript.entries(),
    })))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.sessions.end(&session_id) {
        return Err(ApiError::NotFound("Session not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}
