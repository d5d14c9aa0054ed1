//! The connective tagger component

use crate::context::{PipelineContext, MORPHOLOGIZER};
use crate::doc::{ConnectiveKind, Doc};
use crate::error::{Result, TaggerError};
use crate::lists;
use crate::matcher::PhraseMatcher;
use crate::types::{filter_spans, Span};
use tracing::{debug, warn};

/// Finds every non-overlapping occurrence of a fixed connective phrase list
/// in a tokenized document and records the matches on the document.
///
/// One tagger type serves both connective classes: construct it with
/// [`ConnectiveKind::Additive`] or [`ConnectiveKind::Temporal`] and the
/// phrase list to match. Matching is case-insensitive on surface forms.
///
/// The tagger must run after the morphological tagging stage; construction
/// fails if the context does not declare it. The tagger itself never reads
/// morphological features.
#[derive(Debug, Clone)]
pub struct ConnectiveTagger {
    kind: ConnectiveKind,
    matcher: PhraseMatcher,
}

impl ConnectiveTagger {
    /// Build a tagger for the given kind and phrase list.
    ///
    /// Each phrase is tokenized with the context's tokenizer and indexed by
    /// lowercased surface form. Phrases that tokenize to nothing are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`TaggerError::MissingPrecursor`] if the context does not
    /// declare the morphologizer stage. No document state is touched in
    /// that case.
    pub fn new<I, S>(ctx: &PipelineContext, kind: ConnectiveKind, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !ctx.has_pipe(MORPHOLOGIZER) {
            return Err(TaggerError::MissingPrecursor {
                tagger: kind.label().to_string(),
                stage: MORPHOLOGIZER.to_string(),
            });
        }

        let mut matcher = PhraseMatcher::new();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            let tokens = ctx.tokenize(phrase);
            if tokens.is_empty() {
                warn!("connective phrase {phrase:?} tokenizes to nothing, skipping");
                continue;
            }
            matcher.add(phrase, &tokens);
        }
        Ok(Self { kind, matcher })
    }

    /// Build an additive tagger with a caller-supplied phrase list
    pub fn additive<I, S>(ctx: &PipelineContext, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ctx, ConnectiveKind::Additive, phrases)
    }

    /// Build a temporal tagger with a caller-supplied phrase list
    pub fn temporal<I, S>(ctx: &PipelineContext, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ctx, ConnectiveKind::Temporal, phrases)
    }

    /// Build an additive tagger with the built-in Spanish list
    pub fn spanish_additive(ctx: &PipelineContext) -> Result<Self> {
        Self::additive(ctx, lists::SPANISH_ADDITIVE)
    }

    /// Build a temporal tagger with the built-in Spanish list
    pub fn spanish_temporal(ctx: &PipelineContext) -> Result<Self> {
        Self::temporal(ctx, lists::SPANISH_TEMPORAL)
    }

    /// The connective kind this tagger matches
    pub fn kind(&self) -> ConnectiveKind {
        self.kind
    }

    /// Find all connectives in the document and store them on it.
    ///
    /// Overwrites the document's slot for this tagger's kind with the
    /// non-overlapping matches (longest wins, ties to the earliest start)
    /// and their count. Documents without any match end up with an empty
    /// list and count 0.
    pub fn apply(&self, doc: &mut Doc) {
        let matches = self.matcher.find_matches(doc.tokens());
        let candidates: Vec<Span> = matches
            .iter()
            .map(|m| Span::new(m.start, m.end, doc.span_text(m.start, m.end)))
            .collect();
        let spans = filter_spans(candidates);
        debug!(
            "{} connectives: {} candidate matches, {} kept",
            self.kind,
            matches.len(),
            spans.len()
        );
        doc.set_connectives(self.kind, spans);
    }
}
