//! Record Builder — the only stateful stage of the parser.
//!
//! Holds the position under construction and seals it into `positions` when
//! a new employer heading arrives, when any section header arrives, or at end
//! of input. A sealed position is never touched again, so no bullet can end
//! up under two employers.

use tracing::{debug, warn};

use crate::models::resume::{Position, StructuredResume};
use crate::parser::experience::{classify, strip_bullet, ExperienceLine};
use crate::parser::sections::{SectionLine, SectionTracker};
use crate::parser::skills::collect_skills;
use crate::parser::{ParseReport, ParseWarning, ResumeParser, Section};

pub struct RecordBuilder<'p> {
    parser: &'p ResumeParser,
    tracker: SectionTracker<'p>,
    resume: StructuredResume,
    current: Option<Position>,
    warnings: Vec<ParseWarning>,
}

impl<'p> RecordBuilder<'p> {
    pub fn new(parser: &'p ResumeParser) -> Self {
        Self {
            parser,
            tracker: SectionTracker::new(parser.config()),
            resume: StructuredResume::default(),
            current: None,
            warnings: Vec::new(),
        }
    }

    /// Feeds one normalized line. `line_number` is 1-based.
    pub fn feed(&mut self, line_number: usize, line: &str) {
        match self.tracker.observe(line) {
            SectionLine::Header { section, inline } => {
                self.seal_current();
                if let Some(content) = inline {
                    self.route(section, line_number, content);
                }
            }
            SectionLine::Content {
                section: Some(section),
            } => self.route(section, line_number, line),
            SectionLine::Content { section: None } => {
                debug!("Line {line_number} precedes any section header, ignored");
            }
        }
    }

    /// Flushes the open position and returns the finished record.
    pub fn finish(mut self) -> ParseReport {
        self.seal_current();
        debug!("Input ended in section {:?}", self.tracker.current());

        if !self.tracker.saw_any_header() {
            warn!("No experience, education or skills header found; résumé treated as unstructured");
            self.warnings.insert(0, ParseWarning::NoSectionsFound);
        }

        ParseReport {
            resume: self.resume,
            warnings: self.warnings,
        }
    }

    fn route(&mut self, section: Section, line_number: usize, line: &str) {
        match section {
            Section::Experience => self.experience_line(line_number, line),
            Section::Education => self.resume.education.push(line.to_string()),
            Section::Skills => {
                let config = self.parser.config();
                let terms = strip_bullet(line, &config.bullet_glyphs).unwrap_or(line);
                collect_skills(terms, &config.technical_keywords, &mut self.resume.skills);
            }
        }
    }

    fn experience_line(&mut self, line_number: usize, line: &str) {
        let awaiting_title = self.current.as_ref().is_some_and(|p| p.title.is_empty());

        match classify(line, self.parser.config(), awaiting_title) {
            ExperienceLine::Bullet(text) => match self.current.as_mut() {
                Some(position) => position.responsibilities.push(text.to_string()),
                None => {
                    warn!("Bullet on line {line_number} has no employer heading above it, dropped");
                    self.warnings.push(ParseWarning::OrphanBullet {
                        line: line.to_string(),
                    });
                }
            },
            ExperienceLine::EmptyBullet => {
                warn!("Empty bullet on line {line_number}, dropped");
                self.warnings.push(ParseWarning::EmptyBullet { line_number });
            }
            ExperienceLine::EmployerHeading { employer } => {
                self.seal_current();
                debug!("Line {line_number} opens position at {employer:?}");
                self.current = Some(Position {
                    employer: employer.to_string(),
                    ..Default::default()
                });
            }
            ExperienceLine::TitleOrDate => {
                if let Some(position) = self.current.as_mut() {
                    position.title = line.to_string();
                    if position.dates.is_empty() {
                        if let Some(dates) = self.parser.date_tail(line) {
                            position.dates = dates.to_string();
                        }
                    }
                }
            }
            ExperienceLine::Continuation => match self.current.as_mut() {
                Some(position) => match position.responsibilities.last_mut() {
                    Some(bullet) => append_words(bullet, line),
                    None => append_words(&mut position.title, line),
                },
                None => {
                    warn!("Line {line_number} has no employer heading above it, dropped");
                    self.warnings.push(ParseWarning::OrphanLine {
                        line: line.to_string(),
                    });
                }
            },
        }
    }

    fn seal_current(&mut self) {
        if let Some(position) = self.current.take() {
            debug!(
                "Sealed position at {:?} with {} bullets",
                position.employer,
                position.responsibilities.len()
            );
            self.resume.positions.push(position);
        }
    }
}

fn append_words(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str]) -> ParseReport {
        let parser = ResumeParser::default();
        let mut builder = RecordBuilder::new(&parser);
        for (index, line) in lines.iter().enumerate() {
            builder.feed(index + 1, line);
        }
        builder.finish()
    }

    #[test]
    fn test_title_line_sets_title_and_dates() {
        let report = build(&["EXPERIENCE", "Acme Corp – Consulting", "Analyst, NY 2020 - 2021"]);
        let position = &report.resume.positions[0];

        assert_eq!(position.title, "Analyst, NY 2020 - 2021");
        assert_eq!(position.dates, "2020 - 2021");
        assert_eq!(position.location, "");
    }

    #[test]
    fn test_continuation_never_overwrites_dates() {
        let report = build(&[
            "EXPERIENCE",
            "Acme Corp – Consulting",
            "Analyst 2020 - 2021",
            "based in the 2019 office",
        ]);
        let position = &report.resume.positions[0];

        assert_eq!(position.dates, "2020 - 2021");
        assert_eq!(position.title, "Analyst 2020 - 2021 based in the 2019 office");
    }

    #[test]
    fn test_title_without_year_leaves_dates_empty() {
        let report = build(&["EXPERIENCE", "Acme Corp – Consulting", "analyst"]);
        let position = &report.resume.positions[0];

        assert_eq!(position.title, "analyst");
        assert!(position.dates.is_empty());
    }

    #[test]
    fn test_bullet_before_any_employer_is_dropped_with_warning() {
        let report = build(&["EXPERIENCE", "• Did X", "Acme Corp – Consulting", "• Did Y"]);

        assert_eq!(report.resume.positions.len(), 1);
        assert_eq!(report.resume.positions[0].responsibilities, vec!["Did Y"]);
        assert_eq!(
            report.warnings,
            vec![ParseWarning::OrphanBullet {
                line: "• Did X".to_string()
            }]
        );
    }

    #[test]
    fn test_line_before_any_employer_is_dropped_with_warning() {
        let report = build(&["EXPERIENCE", "worked at several firms 2010"]);

        assert!(report.resume.positions.is_empty());
        assert_eq!(
            report.warnings,
            vec![ParseWarning::OrphanLine {
                line: "worked at several firms 2010".to_string()
            }]
        );
    }

    #[test]
    fn test_every_position_has_an_employer() {
        let report = build(&[
            "EXPERIENCE",
            "• stray",
            "Acme Corp – Consulting",
            "Analyst 2020",
            "Beta Inc",
            "Manager 2021",
        ]);

        assert_eq!(report.resume.positions.len(), 2);
        assert!(report
            .resume
            .positions
            .iter()
            .all(|p| !p.employer.is_empty()));
    }

    #[test]
    fn test_header_inline_content_is_routed() {
        let report = build(&["Skills: Python, Negotiation", "EDUCATION: BA, State University"]);

        assert_eq!(report.resume.skills.technical, vec!["Python"]);
        assert_eq!(report.resume.skills.soft, vec!["Negotiation"]);
        assert_eq!(report.resume.education, vec!["BA, State University"]);
    }

    #[test]
    fn test_bulleted_skills_lose_their_glyphs() {
        let report = build(&["SKILLS", "• Python", "• Leadership, Excel", "•"]);

        assert_eq!(report.resume.skills.technical, vec!["Python", "Excel"]);
        assert_eq!(report.resume.skills.soft, vec!["Leadership"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_preamble_lines_are_ignored() {
        let report = build(&["Jane Doe", "jane@example.com", "EDUCATION", "BA, State University"]);

        assert_eq!(report.resume.education, vec!["BA, State University"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_second_experience_section_starts_fresh() {
        let report = build(&[
            "EXPERIENCE",
            "Acme Corp – Consulting",
            "Analyst 2020",
            "• Did X",
            "EDUCATION",
            "BA, State University",
            "VOLUNTEER EXPERIENCE",
            "• Orphaned after header",
            "Red Cross – Relief",
            "Volunteer 2018",
            "• Did Y",
        ]);

        let employers: Vec<_> = report.resume.employers().collect();
        assert_eq!(employers, vec!["Acme Corp", "Red Cross"]);
        assert_eq!(report.resume.positions[0].responsibilities, vec!["Did X"]);
        assert_eq!(report.resume.positions[1].responsibilities, vec!["Did Y"]);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_no_header_warning_comes_first() {
        let report = build(&["Just a paragraph of text"]);
        assert_eq!(report.warnings, vec![ParseWarning::NoSectionsFound]);
    }
}
