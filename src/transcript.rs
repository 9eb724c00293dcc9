//! Transcript extraction
//!
//! Pulls plain text out of an uploaded PDF and enforces the two length rules
//! of the pipeline: a minimum of extractable text (scanned or image-only PDFs
//! yield almost none) and a truncation budget that keeps the prompt inside the
//! model's context window.

use thiserror::Error;

/// Minimum extractable characters for a transcript to be analyzable.
/// Below this the PDF is almost certainly scanned, image-based, or empty.
pub const MIN_EXTRACTED_CHARS: usize = 100;

/// Transcript budget forwarded to the model (~5k tokens). A cost and
/// context-window control, not a correctness requirement.
pub const MAX_TRANSCRIPT_CHARS: usize = 20_000;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error(
        "Could not extract sufficient text from the PDF. \
         The file may be scanned/image-based or empty."
    )]
    InsufficientText,

    #[error("Failed to parse PDF: {0}")]
    Parse(String),
}

/// Extract the transcript text from PDF bytes.
///
/// Returns [`TranscriptError::InsufficientText`] when the PDF parses but
/// yields fewer than [`MIN_EXTRACTED_CHARS`] characters of text.
pub fn transcript_from_pdf(data: &[u8]) -> Result<String, TranscriptError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| TranscriptError::Parse(e.to_string()))?;

    if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
        return Err(TranscriptError::InsufficientText);
    }

    Ok(text)
}

/// Truncate a transcript to the first [`MAX_TRANSCRIPT_CHARS`] characters.
///
/// Counts characters rather than bytes so the cut never lands inside a
/// multi-byte sequence.
pub fn truncate_to_budget(text: &str) -> &str {
    match text.char_indices().nth(MAX_TRANSCRIPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_untouched() {
        let text = "Revenue grew 12% year over year.";
        assert_eq!(truncate_to_budget(text), text);
    }

    #[test]
    fn truncate_at_exact_budget_is_identity() {
        let text = "a".repeat(MAX_TRANSCRIPT_CHARS);
        assert_eq!(truncate_to_budget(&text).len(), MAX_TRANSCRIPT_CHARS);
        assert_eq!(truncate_to_budget(&text), text);
    }

    #[test]
    fn truncate_over_budget_keeps_first_20k_chars() {
        let text = "b".repeat(MAX_TRANSCRIPT_CHARS + 5_000);
        let truncated = truncate_to_budget(&text);
        assert_eq!(truncated.chars().count(), MAX_TRANSCRIPT_CHARS);
        assert!(text.starts_with(truncated));
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        // 'é' is two bytes in UTF-8; a byte-indexed slice would panic here
        let text = "é".repeat(MAX_TRANSCRIPT_CHARS + 10);
        let truncated = truncate_to_budget(&text);
        assert_eq!(truncated.chars().count(), MAX_TRANSCRIPT_CHARS);
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let result = transcript_from_pdf(b"not a pdf at all");
        assert!(matches!(result, Err(TranscriptError::Parse(_))));
    }
}
