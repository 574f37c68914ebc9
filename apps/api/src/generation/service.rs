//! Content generation service — opaque text-in / text-out capability.
//!
//! `AppState` holds an `Arc<dyn ContentGenerator>`, chosen at startup:
//! `LlmClient` when an API key is configured, `DisabledGenerator` otherwise.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Returns generated text for a prompt and system instruction.
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, AppError>;

    /// Short label for logs and responses ("llm", "disabled", ...).
    fn backend(&self) -> &'static str;
}

#[async_trait]
impl ContentGenerator for LlmClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, AppError> {
        self.call_text(prompt, system)
            .await
            .map_err(|e| AppError::Generation(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Stand-in used when no API key is configured. Every call is rejected.
pub struct DisabledGenerator;

#[async_trait]
impl ContentGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, AppError> {
        Err(AppError::GenerationUnavailable)
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}
