//! Attribution check — every employer in the structured record must survive
//! into the generated résumé.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::resume::StructuredResume;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionCheck {
    pub passed: bool,
    pub missing_employers: Vec<String>,
}

pub fn check_attribution(resume: &StructuredResume, generated: &str) -> AttributionCheck {
    let generated_lower = generated.to_lowercase();

    let missing_employers: Vec<String> = resume
        .employers()
        .filter(|employer| !generated_lower.contains(&employer.to_lowercase()))
        .map(String::from)
        .collect();

    if !missing_employers.is_empty() {
        warn!(
            "Generated résumé omits {} employer(s): {}",
            missing_employers.len(),
            missing_employers.join(", ")
        );
    }

    AttributionCheck {
        passed: missing_employers.is_empty(),
        missing_employers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Position;

    fn resume(employers: &[&str]) -> StructuredResume {
        StructuredResume {
            positions: employers
                .iter()
                .map(|e| Position {
                    employer: e.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_employers_present_passes() {
        let check = check_attribution(
            &resume(&["Acme Corp", "Beta Inc"]),
            "### ACME CORP\n- Did X\n### Beta Inc\n- Did Z",
        );
        assert!(check.passed);
        assert!(check.missing_employers.is_empty());
    }

    #[test]
    fn test_missing_employer_is_reported() {
        let check = check_attribution(&resume(&["Acme Corp", "Beta Inc"]), "### Acme Corp\n- Did X");
        assert!(!check.passed);
        assert_eq!(check.missing_employers, vec!["Beta Inc"]);
    }

    #[test]
    fn test_empty_record_passes_trivially() {
        assert!(check_attribution(&StructuredResume::default(), "").passed);
    }
}
