//! Axum route handlers for the Résumé API.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::parser::ParseReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/resumes/parse
///
/// Parses already-extracted résumé text.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseReport>, AppError> {
    let report = state.parser.parse(&request.text)?;
    Ok(Json(report))
}

/// POST /api/v1/resumes/extract
///
/// Body is the raw document; `Content-Type` picks PDF, plain text or Markdown.
pub async fn handle_extract(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ParseReport>, AppError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let kind = DocumentKind::from_mime(content_type)
        .ok_or_else(|| AppError::UnsupportedMediaType(content_type.to_string()))?;

    let text = tokio::task::spawn_blocking(move || extract_text(&body, kind))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;
    info!(
        "Extracted {} characters from {:?} document",
        text.chars().count(),
        kind
    );

    let report = state.parser.parse(&text)?;
    if report.is_unstructured() {
        warn!("Extracted {:?} document has no recognizable sections", kind);
    }
    Ok(Json(report))
}
