//! Text extraction — turns an uploaded document into one text blob for the parser.
//!
//! PDF goes through `pdf-extract`; plain text and Markdown must be valid UTF-8.
//! Deciding whether the result is long enough is the parser's job.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Markdown,
}

impl DocumentKind {
    /// Resolves a `Content-Type` value, ignoring parameters such as `charset`.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::PlainText),
            "text/markdown" | "text/x-markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("document is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Extracts text from raw document bytes. Blocking for PDFs.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        DocumentKind::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentKind::Markdown => {
            let text = String::from_utf8(bytes.to_vec())?;
            Ok(markdown_to_plain(&text))
        }
    }
}

/// Drops heading hashes and emphasis markers and turns list items into `•` bullets.
fn markdown_to_plain(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.trim_start_matches('#').trim_start();
            let line = ["- ", "* ", "+ "]
                .iter()
                .find_map(|marker| line.strip_prefix(marker))
                .map(|item| format!("• {item}"))
                .unwrap_or_else(|| line.to_string());
            line.replace("**", "").replace("__", "")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
