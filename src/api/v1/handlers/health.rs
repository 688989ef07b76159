/*
 * Responsibility
 * - GET /health (疎通用)
 * - token は不要。付いていても結果は変わらない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
