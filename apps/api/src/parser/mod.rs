//! Résumé Parser — turns extracted résumé text into a `StructuredResume`.
//!
//! Pipeline: normalize → section tracking → per-section line handling
//! (experience tagger, skills splitter, education collector) → record builder.
//! No LLM calls, no I/O. Every heuristic list lives in `ParserConfig` so it can
//! be tuned without touching control flow.

pub mod builder;
pub mod experience;
pub mod handlers;
pub mod normalize;
pub mod sections;
pub mod skills;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::resume::StructuredResume;
use crate::parser::builder::RecordBuilder;
use crate::parser::normalize::normalize_lines;

/// A 4-digit year (19xx / 20xx) and everything after it on the line.
const YEAR_TAIL_PATTERN: &str = r"\b(?:19|20)\d{2}\b.*$";

/// Default technical-skill markers. Matched case-insensitively as substrings.
pub const DEFAULT_TECHNICAL_KEYWORDS: &[&str] = &[
    "excel",
    "python",
    "software",
    "data",
    "stata",
    "powerpoint",
    "sql",
    "tableau",
    "matlab",
    "spss",
    "java",
    "power bi",
    "html",
    "analytics",
    "programming",
    "statistics",
    "machine learning",
];

pub const DEFAULT_BULLET_GLYPHS: &[char] = &['•', '●', '▪', '◦'];

/// Words that may sit on either side of a date-range dash.
pub const DEFAULT_DATE_WORDS: &[&str] = &[
    "jan", "january", "feb", "february", "mar", "march", "apr", "april", "may", "jun", "june",
    "jul", "july", "aug", "august", "sep", "sept", "september", "oct", "october", "nov",
    "november", "dec", "december", "present", "current", "now", "today",
];

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
}

/// A phrase that marks the start of a section when found in a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    pub phrase: String,
    pub section: Section,
}

impl SectionMarker {
    pub fn new(phrase: &str, section: Section) -> Self {
        Self {
            phrase: phrase.to_uppercase(),
            section,
        }
    }
}

/// Tunable heuristics for the parser. Passed explicitly at construction.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Checked in order; the first marker found in a header line wins.
    pub section_markers: Vec<SectionMarker>,
    pub bullet_glyphs: Vec<char>,
    pub technical_keywords: Vec<String>,
    pub date_words: Vec<String>,
    /// Trimmed input shorter than this is an extraction failure (never below 1).
    pub min_text_chars: usize,
    /// Enables the "short title-case line" employer-heading fallback.
    pub heading_fallback: bool,
    pub max_heading_words: usize,
    /// Longer lines are never section headers, even if they contain a marker.
    pub max_header_words: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            section_markers: vec![
                SectionMarker::new("PROFESSIONAL EXPERIENCE", Section::Experience),
                SectionMarker::new("EXPERIENCE", Section::Experience),
                SectionMarker::new("EDUCATION", Section::Education),
                SectionMarker::new("SPECIFIC SKILLS", Section::Skills),
                SectionMarker::new("SKILLS", Section::Skills),
            ],
            bullet_glyphs: DEFAULT_BULLET_GLYPHS.to_vec(),
            technical_keywords: DEFAULT_TECHNICAL_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            date_words: DEFAULT_DATE_WORDS.iter().map(|s| s.to_string()).collect(),
            min_text_chars: 1,
            heading_fallback: true,
            max_heading_words: 10,
            max_header_words: 5,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("extracted text is too short to parse ({chars} characters, need at least {min})")]
    ExtractionFailure { chars: usize, min: usize },
}

/// Heuristic diagnostics. None of these stop the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// No experience, education or skills header anywhere in the text.
    NoSectionsFound,
    /// Bullet seen before any employer heading; discarded.
    OrphanBullet { line: String },
    /// Non-bullet experience line before any employer heading; discarded.
    OrphanLine { line: String },
    /// Bullet glyph with no text; discarded.
    EmptyBullet { line_number: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub resume: StructuredResume,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    /// True when the parser could not find any known section.
    pub fn is_unstructured(&self) -> bool {
        self.warnings.contains(&ParseWarning::NoSectionsFound)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parser
// ────────────────────────────────────────────────────────────────────────────

/// Stateless between calls; each `parse` allocates its own builder, so one
/// parser can be shared across tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    config: ParserConfig,
    year_tail: Regex,
}

impl ResumeParser {
    pub fn new(mut config: ParserConfig) -> Self {
        for keyword in &mut config.technical_keywords {
            *keyword = keyword.trim().to_lowercase();
        }
        config.technical_keywords.retain(|k| !k.is_empty());
        for word in &mut config.date_words {
            *word = word.trim().to_lowercase();
        }
        for marker in &mut config.section_markers {
            marker.phrase = marker.phrase.to_uppercase();
        }

        Self {
            config,
            year_tail: Regex::new(YEAR_TAIL_PATTERN).expect("year pattern is valid"),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses résumé text into a record plus diagnostics.
    ///
    /// Fails only when the text is too short to be a real extraction result;
    /// every other ambiguity resolves to a default branch.
    pub fn parse(&self, text: &str) -> Result<ParseReport, ParseError> {
        let chars = text.trim().chars().count();
        let min = self.config.min_text_chars.max(1);
        if chars < min {
            return Err(ParseError::ExtractionFailure { chars, min });
        }

        let lines = normalize_lines(text);
        let mut builder = RecordBuilder::new(self);
        for (index, line) in lines.iter().enumerate() {
            builder.feed(index + 1, line);
        }
        let report = builder.finish();

        debug!(
            "Parsed {} lines: {} positions, {} education lines, {} skills, {} warnings",
            lines.len(),
            report.resume.positions.len(),
            report.resume.education.len(),
            report.resume.skills.technical.len() + report.resume.skills.soft.len(),
            report.warnings.len()
        );

        Ok(report)
    }

    /// Same as `parse`, without the diagnostics.
    pub fn parse_resume(&self, text: &str) -> Result<StructuredResume, ParseError> {
        self.parse(text).map(|report| report.resume)
    }

    /// Year-and-after tail of a title line, if it has one.
    pub(crate) fn date_tail<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.year_tail
            .find(line)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
