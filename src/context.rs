//! Shared pipeline context: declared stages and tokenization

use crate::doc::Doc;
use crate::types::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Name of the morphological tagging stage that connective taggers require
/// to have run upstream
pub const MORPHOLOGIZER: &str = "morphologizer";

/// Shared language-processing context for a pipeline.
///
/// Carries the ordered list of configured stage names, used by components
/// to verify their upstream preconditions, and the word tokenizer used both
/// for documents and for the connective phrases themselves.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pipes: Vec<String>,
}

impl PipelineContext {
    /// Create a context with no configured stages
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stage as configured, builder style
    pub fn with_pipe(mut self, name: impl Into<String>) -> Self {
        self.add_pipe(name);
        self
    }

    /// Declare a stage as configured
    pub fn add_pipe(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_pipe(&name) {
            self.pipes.push(name);
        }
    }

    /// Names of configured stages, in declaration order
    pub fn pipe_names(&self) -> &[String] {
        &self.pipes
    }

    /// Whether a stage with the given name is configured
    pub fn has_pipe(&self, name: &str) -> bool {
        self.pipes.iter().any(|p| p == name)
    }

    /// Split text into tokens on Unicode word boundaries.
    ///
    /// Whitespace segments are dropped; punctuation is kept as its own
    /// token. Offsets are character offsets into the source text.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut offset = 0usize;
        for word in text.split_word_bounds() {
            let chars = word.chars().count();
            if !word.trim().is_empty() {
                tokens.push(Token::new(word, offset, offset + chars));
            }
            offset += chars;
        }
        tokens
    }

    /// Tokenize text into a fresh document with empty annotations
    pub fn make_doc(&self, text: &str) -> Doc {
        Doc::new(self.tokenize(text))
    }
}
