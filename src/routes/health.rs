use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "ai_generation": if state.quiz_generator.is_ai_enabled() { "enabled" } else { "fallback_only" },
    });
    (StatusCode::OK, Json(body))
}
