//! Core value types: tokens, spans, and overlap resolution

use serde::{Deserialize, Serialize};

/// A single token produced by the pipeline tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the source text
    pub text: String,
    /// Character offset of the first character in the source text
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A contiguous token range `[start, end)` that matched one connective phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Index of the first token in the span
    pub start: usize,
    /// Index one past the last token in the span
    pub end: usize,
    /// Matched surface text, tokens joined by single spaces
    pub text: String,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Number of tokens covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Whether two spans share at least one token
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Resolve overlapping candidate spans.
///
/// The longest span wins at each overlapping position; for equal length the
/// span starting earliest wins. Kept spans are returned in document order.
pub fn filter_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));

    let mut kept: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if kept.iter().all(|k| !k.overlaps(&span)) {
            kept.push(span);
        }
    }
    kept.sort_by_key(|s| s.start);
    kept
}
