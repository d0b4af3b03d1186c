/*
 * Responsibility
 * - GET /health (liveness probe)
 * - carries no bearer token, so it also demonstrates the gate's pass-through path
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
