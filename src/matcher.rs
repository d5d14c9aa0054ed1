//! Case-insensitive token-sequence phrase index

use crate::types::Token;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A raw phrase match: pattern id plus matched token range.
///
/// Overlapping matches are all reported; overlap resolution is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Index of the matched pattern, in insertion order
    pub pattern: usize,
    /// Index of the first matched token
    pub start: usize,
    /// Index one past the last matched token
    pub end: usize,
}

#[derive(Debug, Clone)]
struct Pattern {
    key: String,
    // Lowercased token surfaces; connective phrases are short
    tokens: SmallVec<[String; 4]>,
}

/// Phrase-match index over lowercased token sequences.
///
/// Patterns are bucketed by their lowercased first token, so a document
/// position only probes patterns that can start there.
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher {
    patterns: Vec<Pattern>,
    heads: FxHashMap<String, SmallVec<[usize; 4]>>,
}

impl PhraseMatcher {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of patterns in the index
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the index holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Key under which a pattern was inserted
    pub fn key(&self, pattern: usize) -> &str {
        &self.patterns[pattern].key
    }

    /// Insert a tokenized phrase under `key`.
    ///
    /// Matching compares lowercased surface forms. Zero-token patterns are
    /// rejected by the caller; inserting one here would never match.
    pub fn add(&mut self, key: impl Into<String>, tokens: &[Token]) {
        let lowered: SmallVec<[String; 4]> =
            tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let Some(head) = lowered.first().cloned() else {
            return;
        };
        let id = self.patterns.len();
        self.patterns.push(Pattern {
            key: key.into(),
            tokens: lowered,
        });
        self.heads.entry(head).or_default().push(id);
    }

    /// Find every occurrence of every pattern in the token sequence.
    ///
    /// Matches are ordered by start position, then by pattern insertion
    /// order at equal positions.
    pub fn find_matches(&self, tokens: &[Token]) -> Vec<PhraseMatch> {
        let mut matches = Vec::new();
        if self.patterns.is_empty() || tokens.is_empty() {
            return matches;
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        for start in 0..lowered.len() {
            let Some(candidates) = self.heads.get(lowered[start].as_str()) else {
                continue;
            };
            for &id in candidates {
                let pattern = &self.patterns[id];
                let end = start + pattern.tokens.len();
                if end > lowered.len() {
                    continue;
                }
                if pattern.tokens.iter().eq(&lowered[start..end]) {
                    matches.push(PhraseMatch {
                        pattern: id,
                        start,
                        end,
                    });
                }
            }
        }
        matches
    }
}
