use axum::Json;
use serde_json::{json, Value};

pub const HEALTH_STATUS: &str = "Skill extraction service is running!";

/// GET /health
/// Liveness check. No body, no side effects.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": HEALTH_STATUS }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "SkillSync NLP service is running!" }))
}
