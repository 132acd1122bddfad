//! Sentence segmentation with character offsets.
//!
//! This crate splits raw text into sentence spans for similarity analysis.
//! Each [`SentenceSpan`] carries the trimmed sentence text plus the byte
//! offsets of the untrimmed region in the original string, so callers can
//! slice or highlight the source without re-scanning it.
//!
//! Segmentation is a punctuation heuristic rather than a full tokenizer:
//! a boundary occurs after `.`, `!` or `?` followed by whitespace, when the
//! next non-whitespace character is an uppercase letter (including accented
//! Latin uppercase) or a digit. This avoids splitting after abbreviations
//! that continue in lowercase, at the cost of missing boundaries before
//! lowercase-starting sentences.
//!
//! ```
//! use textsim_text::segment;
//!
//! let spans = segment("O café é bom. Ele é caro.");
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].text, "O café é bom.");
//! assert_eq!(spans[1].text, "Ele é caro.");
//! ```

pub mod segment;

pub use segment::{SentenceSpan, segment};
