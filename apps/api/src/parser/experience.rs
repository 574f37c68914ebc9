//! Experience-Section Line Tagger.
//!
//! Ordered predicate chain, first match wins:
//! 1. bullet glyph → `Bullet` (or `EmptyBullet` when nothing follows it)
//! 2. heading separator, or a short title-case line without digits → `EmployerHeading`
//! 3. open position without a title → `TitleOrDate`
//! 4. anything else → `Continuation`

use crate::parser::ParserConfig;

/// Separators between an employer and its descriptor.
const HEADING_SEPARATORS: &[&str] = &[" – ", " — ", " - "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLine<'a> {
    Bullet(&'a str),
    EmptyBullet,
    EmployerHeading { employer: &'a str },
    TitleOrDate,
    Continuation,
}

/// Classifies one experience-section line.
///
/// `awaiting_title` is true when a position is open and its title is still empty.
pub fn classify<'a>(
    line: &'a str,
    config: &ParserConfig,
    awaiting_title: bool,
) -> ExperienceLine<'a> {
    if let Some(text) = strip_bullet(line, &config.bullet_glyphs) {
        return if text.is_empty() {
            ExperienceLine::EmptyBullet
        } else {
            ExperienceLine::Bullet(text)
        };
    }

    if let Some(employer) = employer_before_separator(line, &config.date_words) {
        return ExperienceLine::EmployerHeading { employer };
    }

    if config.heading_fallback && looks_like_heading(line, config.max_heading_words) {
        return ExperienceLine::EmployerHeading { employer: line };
    }

    if awaiting_title {
        ExperienceLine::TitleOrDate
    } else {
        ExperienceLine::Continuation
    }
}

/// Text after a leading bullet glyph, trimmed. `None` if the line is not a bullet.
pub fn strip_bullet<'a>(line: &'a str, glyphs: &[char]) -> Option<&'a str> {
    line.strip_prefix(glyphs).map(|rest| {
        rest.trim_start_matches(|c: char| c.is_whitespace() || glyphs.contains(&c))
            .trim_end()
    })
}

/// Employer name before the first heading separator.
///
/// A dash between two date-like words (`2020 - 2021`, `Jan 2019 – Present`)
/// is a date range, not a separator, and is skipped.
pub fn employer_before_separator<'a>(line: &'a str, date_words: &[String]) -> Option<&'a str> {
    let mut candidates: Vec<(usize, usize)> = HEADING_SEPARATORS
        .iter()
        .flat_map(|sep| line.match_indices(sep).map(|(idx, s)| (idx, s.len())))
        .collect();
    candidates.sort_unstable();

    candidates.into_iter().find_map(|(idx, len)| {
        let before = &line[..idx];
        let after = &line[idx + len..];
        let word_before = before.split_whitespace().next_back().unwrap_or("");
        let word_after = after.split_whitespace().next().unwrap_or("");
        if is_date_word(word_before, date_words) && is_date_word(word_after, date_words) {
            return None;
        }
        Some(before.trim()).filter(|employer| !employer.is_empty())
    })
}

/// Fallback heading test: no digits, at most `max_words` tokens, starts uppercase.
pub fn looks_like_heading(line: &str, max_words: usize) -> bool {
    !line.chars().any(|c| c.is_ascii_digit())
        && line.split_whitespace().count() <= max_words
        && line.chars().next().is_some_and(char::is_uppercase)
}

fn is_date_word(word: &str, date_words: &[String]) -> bool {
    let word = word.trim_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    let lower = word.to_lowercase();
    date_words.iter().any(|w| *w == lower)
}
