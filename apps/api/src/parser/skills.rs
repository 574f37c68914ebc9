use crate::models::resume::Skills;

/// Splits a skills line on `|` and `,` and files each term as technical or soft.
///
/// `keywords` must already be lowercase. Source order is kept and repeated
/// terms are not removed.
pub fn collect_skills(line: &str, keywords: &[String], skills: &mut Skills) {
    for term in split_terms(line) {
        if is_technical(term, keywords) {
            skills.technical.push(term.to_string());
        } else {
            skills.soft.push(term.to_string());
        }
    }
}

pub fn split_terms(line: &str) -> impl Iterator<Item = &str> {
    line.split(['|', ','])
        .map(str::trim)
        .filter(|term| !term.is_empty())
}

pub fn is_technical(term: &str, keywords: &[String]) -> bool {
    let lower = term.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
}
