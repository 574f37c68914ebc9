//! Section Tracker — decides which section each line belongs to.
//!
//! States: none → experience / education / skills, switched only by header
//! lines. Whatever section is active at the end of input simply ends there.

use tracing::debug;

use crate::parser::{ParserConfig, Section};

/// Where a line landed after section tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLine<'a> {
    /// A header. `inline` is content after a `Label:` prefix, if any.
    Header {
        section: Section,
        inline: Option<&'a str>,
    },
    /// A content line in the active section (`None` before the first header).
    Content { section: Option<Section> },
}

pub struct SectionTracker<'c> {
    config: &'c ParserConfig,
    current: Option<Section>,
    headers_seen: usize,
}

impl<'c> SectionTracker<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            current: None,
            headers_seen: 0,
        }
    }

    pub fn current(&self) -> Option<Section> {
        self.current
    }

    pub fn saw_any_header(&self) -> bool {
        self.headers_seen > 0
    }

    pub fn observe<'a>(&mut self, line: &'a str) -> SectionLine<'a> {
        match detect_header(line, self.config) {
            Some((section, inline)) => {
                debug!("Section header {:?}: {:?}", section, line);
                self.current = Some(section);
                self.headers_seen += 1;
                SectionLine::Header { section, inline }
            }
            None => SectionLine::Content {
                section: self.current,
            },
        }
    }
}

/// Tests a line against the configured section markers.
///
/// Case-insensitive substring match on the label (the text before the first
/// `:`, or the whole line). Bullet lines and labels longer than
/// `max_header_words` never count as headers.
pub fn detect_header<'a>(
    line: &'a str,
    config: &ParserConfig,
) -> Option<(Section, Option<&'a str>)> {
    if line.starts_with(config.bullet_glyphs.as_slice()) {
        return None;
    }

    let (label, inline) = match line.split_once(':') {
        Some((label, rest)) => (label, Some(rest.trim()).filter(|s| !s.is_empty())),
        None => (line, None),
    };

    if label.split_whitespace().count() > config.max_header_words {
        return None;
    }

    let label_upper = label.to_uppercase();
    config
        .section_markers
        .iter()
        .find(|marker| label_upper.contains(&marker.phrase))
        .map(|marker| (marker.section, inline))
}
