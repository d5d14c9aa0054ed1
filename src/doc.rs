//! Tokenized documents and their connective annotation slots

use crate::types::{Span, Token};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Which connective inventory a tagger matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectiveKind {
    /// Addition and reinforcement relations ("además", "asimismo")
    Additive,
    /// Temporal sequencing and simultaneity ("después", "mientras tanto")
    Temporal,
}

impl ConnectiveKind {
    /// Annotation label for this kind, the `<prefix>` downstream consumers
    /// use when reading `<prefix>_connectives`
    pub fn label(&self) -> &'static str {
        match self {
            ConnectiveKind::Additive => "additive",
            ConnectiveKind::Temporal => "temporal",
        }
    }
}

impl fmt::Display for ConnectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One annotation slot: matched spans plus their count.
///
/// The count is maintained by [`ConnectiveAnnotations::set`] and always
/// equals the span list length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectiveSet {
    spans: Vec<Span>,
    count: usize,
}

impl ConnectiveSet {
    /// Matched spans, in document order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of matched spans
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Per-document annotation record, one slot per [`ConnectiveKind`].
///
/// Slots default to empty and are overwritten, never appended, each time a
/// tagger runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectiveAnnotations {
    additive: ConnectiveSet,
    temporal: ConnectiveSet,
}

impl ConnectiveAnnotations {
    /// The slot for the given kind
    pub fn get(&self, kind: ConnectiveKind) -> &ConnectiveSet {
        match kind {
            ConnectiveKind::Additive => &self.additive,
            ConnectiveKind::Temporal => &self.temporal,
        }
    }

    /// Replace the slot for the given kind with this invocation's results
    pub(crate) fn set(&mut self, kind: ConnectiveKind, spans: Vec<Span>) {
        let slot = match kind {
            ConnectiveKind::Additive => &mut self.additive,
            ConnectiveKind::Temporal => &mut self.temporal,
        };
        slot.count = spans.len();
        slot.spans = spans;
    }
}

/// A tokenized document carrying connective annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    tokens: Vec<Token>,
    connectives: ConnectiveAnnotations,
}

impl Doc {
    /// Create a document from an already-tokenized sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            connectives: ConnectiveAnnotations::default(),
        }
    }

    /// Create a document from plain words, with synthetic offsets as if the
    /// words were separated by single spaces
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut offset = 0usize;
        for word in words {
            let word = word.as_ref();
            let chars = word.chars().count();
            tokens.push(Token::new(word, offset, offset + chars));
            offset += chars + 1;
        }
        Self::new(tokens)
    }

    /// The document's tokens
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The full annotation record
    pub fn annotations(&self) -> &ConnectiveAnnotations {
        &self.connectives
    }

    /// Matched connective spans of the given kind, in document order
    pub fn connectives(&self, kind: ConnectiveKind) -> &[Span] {
        self.connectives.get(kind).spans()
    }

    /// Number of matched connectives of the given kind
    pub fn connectives_count(&self, kind: ConnectiveKind) -> usize {
        self.connectives.get(kind).count()
    }

    /// Surface text of the token range `[start, end)`, joined by spaces
    pub fn span_text(&self, start: usize, end: usize) -> String {
        self.tokens[start..end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn set_connectives(&mut self, kind: ConnectiveKind, spans: Vec<Span>) {
        self.connectives.set(kind, spans);
    }
}
