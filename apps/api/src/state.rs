use std::sync::Arc;

use crate::config::Config;
use crate::generation::service::ContentGenerator;
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once from config; every request gets its own builder state.
    pub parser: Arc<ResumeParser>,
    /// Pluggable content generation backend. `DisabledGenerator` without an API key.
    pub generator: Arc<dyn ContentGenerator>,
    pub config: Config,
}
