//! Error types for tagger construction

use thiserror::Error;

/// Errors raised while building a connective tagger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggerError {
    /// A required upstream pipeline stage is not configured
    #[error("{tagger} connectives tagger requires the '{stage}' pipe to run first")]
    MissingPrecursor {
        /// Label of the tagger that failed to construct
        tagger: String,
        /// Name of the missing pipeline stage
        stage: String,
    },
}

/// Result type for tagger operations
pub type Result<T> = std::result::Result<T, TaggerError>;
