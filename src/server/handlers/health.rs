use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::rag::TOP_K;
use crate::state::AppState;

pub async fn health(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let pipeline = state.chat.pipeline();
    Json(json!({
        "index_name": pipeline.store().index_name(),
        "embedding_model": pipeline.embedder().model(),
        "llm_provider": pipeline.llm().name(),
        "llm_model": pipeline.llm().model(),
        "top_k": TOP_K,
        "active_sessions": state.sessions.count(),
        "stylesheet_loaded": state.assets.stylesheet().is_some(),
        "started_at": state.started_at,
    }))
}
