//! Offset-preserving sentence splitting.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A sentence boundary: terminal punctuation, whitespace, then an uppercase
/// letter or digit. The `regex` crate has no lookaround, so the pattern
/// matches the whole window and the split points are recovered from the
/// capture-group offsets.
const BOUNDARY_PATTERN: &str = r"([.!?])\s+([A-ZÁÉÍÓÚÀÂÊÔÃÕÜ0-9])";

static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();

fn boundary_re() -> &'static Regex {
    BOUNDARY_RE.get_or_init(|| Regex::new(BOUNDARY_PATTERN).expect("valid boundary pattern"))
}

/// A single sentence extracted from a larger text.
///
/// `text` is trimmed of surrounding whitespace; `start` and `end` are byte
/// offsets of the *untrimmed* region within the original source string, with
/// `start <= end <= source.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceSpan {
    /// The trimmed, non-empty sentence text.
    pub text: String,
    /// Byte offset where this sentence's region begins in the source.
    pub start: usize,
    /// Byte offset just past this sentence's region in the source.
    pub end: usize,
}

/// Split `text` into sentence spans.
///
/// Pure and deterministic. Candidate spans that are empty or whitespace-only
/// are discarded; trailing text after the last boundary is emitted as a final
/// span when non-empty. Empty input yields an empty vector, and input with no
/// boundary yields a single span covering the whole text.
pub fn segment(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for caps in boundary_re().captures_iter(text) {
        // Sentence ends right after the terminal punctuation; the next one
        // begins at the uppercase/digit character.
        let end = caps.get(1).map(|m| m.end()).unwrap_or(0);
        push_span(&mut spans, text, start, end);
        start = caps.get(2).map(|m| m.start()).unwrap_or(end);
    }
    if start < text.len() {
        push_span(&mut spans, text, start, text.len());
    }
    spans
}

fn push_span(spans: &mut Vec<SentenceSpan>, text: &str, start: usize, end: usize) {
    let trimmed = text[start..end].trim();
    if !trimmed.is_empty() {
        spans.push(SentenceSpan {
            text: trimmed.to_string(),
            start,
            end,
        });
    }
}
