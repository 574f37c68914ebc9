use serde::{Deserialize, Serialize};

/// One job block from the experience section.
///
/// Only the record builder creates positions, and it never creates one
/// without an employer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub employer: String,
    pub title: String,
    pub dates: String,
    /// Best-effort. No heuristic fills this reliably, so it is usually empty.
    pub location: String,
    pub responsibilities: Vec<String>,
}

/// Skill terms split into technical and soft, in source order, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

/// Employer-indexed record of a résumé.
///
/// The field names are the serialized contract with the prompt templates
/// in `generation::prompts`; renaming one breaks them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub positions: Vec<Position>,
    pub education: Vec<String>,
    pub skills: Skills,
}

impl StructuredResume {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.education.is_empty() && self.skills.is_empty()
    }

    /// Employers in the order their headings appeared.
    pub fn employers(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|p| p.employer.as_str())
    }
}
