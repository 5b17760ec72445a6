use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    pub session_id: Option<String>,
    pub message: String,
}

/// Runs one turn. Without a `session_id` a new session is started. Pipeline
/// failures still answer 200: the error text is the assistant's turn.
pub async fn post_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatTurnRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message must not be empty".to_string()));
    }

    let (session_id, transcript) = match payload.session_id {
        Some(session_id) => {
            let transcript = state
                .sessions
                .get(&session_id)
                .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;
            (session_id, transcript)
        }
        None => state.sessions.create(),
    };

    let mut transcript = transcript.lock().await;
    let outcome = state.chat.submit(&mut transcript, &payload.message).await;
    let reply = transcript
        .entries()
        .last()
        .cloned()
        .ok_or_else(|| ApiError::internal("transcript is empty after a turn"))?;

    let failure_kind = outcome.failure_kind();
    let outcome_label = if failure_kind.is_some() { "failure" } else { "answer" };

    Ok(Json(json!({
        "session_id": session_id,
        "reply": reply,
        "outcome": outcome_label,
        "failure_kind": failure_kind,
    })))
}
