//! Axum route handlers for the Application API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::pipeline::{build_application, ApplicationPackage, ApplicationRequest};
use crate::state::AppState;

/// POST /api/v1/applications
///
/// Parses the résumé, then asks the content generation service for a fit
/// assessment, a revised résumé and a cover letter built from the parsed record.
pub async fn handle_build_application(
    State(state): State<AppState>,
    Json(request): Json<ApplicationRequest>,
) -> Result<Json<ApplicationPackage>, AppError> {
    let package = build_application(&state.parser, state.generator.as_ref(), &request).await?;
    Ok(Json(package))
}
