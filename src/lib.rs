//! Connective phrase tagging for text cohesion analysis
//!
//! This crate provides a pipeline component that finds additive or temporal
//! connective phrases ("además", "mientras tanto", …) in a tokenized
//! document and attaches the matched spans and their count as document
//! annotations, for downstream readability and cohesion metrics.
//!
//! Matching is a case-insensitive literal lookup of fixed (possibly
//! multi-word) phrases over the document's token sequence; overlapping
//! matches are resolved in favor of the longest span. The tagger declares a
//! precondition on an upstream morphological tagging stage but performs no
//! morphological analysis itself.
//!
//! # Example
//!
//! ```rust
//! use metrix_connectives::{ConnectiveKind, ConnectiveTagger, PipelineContext, MORPHOLOGIZER};
//!
//! let ctx = PipelineContext::new().with_pipe(MORPHOLOGIZER);
//! let tagger = ConnectiveTagger::additive(&ctx, ["además", "sin embargo"]).unwrap();
//!
//! let mut doc = ctx.make_doc("El estudio es bueno, además es rápido");
//! tagger.apply(&mut doc);
//!
//! let spans = doc.connectives(ConnectiveKind::Additive);
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].text, "además");
//! assert_eq!(doc.connectives_count(ConnectiveKind::Additive), 1);
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod doc;
pub mod error;
pub mod lists;
pub mod matcher;
pub mod tagger;
pub mod types;

pub use context::{PipelineContext, MORPHOLOGIZER};
pub use doc::{ConnectiveAnnotations, ConnectiveKind, ConnectiveSet, Doc};
pub use error::{Result, TaggerError};
pub use tagger::ConnectiveTagger;
pub use types::{filter_spans, Span, Token};
