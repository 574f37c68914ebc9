//! Fit assessment — reads the score out of generated assessment text.
//!
//! The generated text is free-form Markdown; the first `NN%` in it is the
//! score. A missing score falls back to 50 so callers always get a category.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const DEFAULT_SCORE: u32 = 50;
const HIGH_THRESHOLD: u32 = 75;
const MEDIUM_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitCategory {
    High,
    Medium,
    Low,
}

impl FitCategory {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            FitCategory::High
        } else if score >= MEDIUM_THRESHOLD {
            FitCategory::Medium
        } else {
            FitCategory::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAssessment {
    /// 0 – 100
    pub score: u32,
    pub category: FitCategory,
    /// False when the text had no percentage and `score` is the default.
    pub score_found: bool,
    pub narrative: String,
}

fn percent_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{1,3})\s*%").expect("percent pattern is valid"))
}

pub fn extract_fit_score(text: &str) -> FitAssessment {
    let found = percent_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    let score = found.unwrap_or(DEFAULT_SCORE).min(100);

    FitAssessment {
        score,
        category: FitCategory::from_score(score),
        score_found: found.is_some(),
        narrative: text.trim().to_string(),
    }
}
