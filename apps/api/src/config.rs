use anyhow::{Context, Result};

use crate::parser::ParserConfig;

const DEFAULT_MIN_RESUME_CHARS: usize = 50;

/// Application configuration loaded from environment variables.
/// Only the generation API key is sensitive, and it is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Without a key the content generation endpoints answer 503.
    pub anthropic_api_key: Option<String>,
    pub llm_model: Option<String>,
    /// Replaces the built-in technical keyword list when set.
    pub technical_keywords: Option<Vec<String>>,
    pub min_resume_chars: usize,
    pub heading_fallback: bool,
    pub max_heading_words: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_model: optional_env("LLM_MODEL"),
            technical_keywords: optional_env("TECHNICAL_SKILL_KEYWORDS")
                .map(|raw| split_list(&raw)),
            min_resume_chars: parse_env("MIN_RESUME_CHARS", DEFAULT_MIN_RESUME_CHARS)?,
            heading_fallback: parse_env("HEADING_FALLBACK", true)?,
            max_heading_words: parse_env("MAX_HEADING_WORDS", 10)?,
        })
    }

    /// Parser heuristics with the environment overrides applied.
    pub fn parser_config(&self) -> ParserConfig {
        let mut parser = ParserConfig {
            min_text_chars: self.min_resume_chars,
            heading_fallback: self.heading_fallback,
            max_heading_words: self.max_heading_words,
            ..Default::default()
        };
        if let Some(keywords) = &self.technical_keywords {
            parser.technical_keywords = keywords.clone();
        }
        parser
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
