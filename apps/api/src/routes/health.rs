use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, the active generation backend and the
/// minimum résumé length the parser accepts.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobfit-api",
        "generator": state.generator.backend(),
        "min_resume_chars": state.config.min_resume_chars,
    }))
}
