/// Splits extracted text into trimmed, non-empty lines.
///
/// Carriage returns, form feeds and Unicode line/paragraph separators become
/// line breaks and blank runs disappear. Tabs and
/// non-breaking spaces become plain spaces so the heading separators
/// (` – `, ` - `) survive PDF extraction. Nothing else is interpreted here.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.trim_start_matches('\u{feff}')
        .split(['\n', '\r', '\x0c', '\u{2028}', '\u{2029}'])
        .map(|line| line.replace(['\t', '\u{a0}'], " "))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
