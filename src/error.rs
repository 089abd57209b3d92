//! Errors produced by the summarization pipeline.

use thiserror::Error;

/// Errors that can occur while summarizing a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// The document has no sentences or no normalizable terms.
    #[error("nothing to summarize: document produced no sentences or terms")]
    EmptyInput,

    /// A document term is not contained in any sentence vector.
    #[error("term {term:?} has zero supporting sentences")]
    ZeroDocumentFrequency { term: String },

    /// A sentence term has no entry in the idf table.
    #[error("term {term:?} is missing from the idf table")]
    MissingIdf { term: String },

    /// The cosine ratio of a sentence left the arccos domain.
    #[error("cosine ratio {value} of sentence {index} is outside [-1, 1]")]
    NumericDomain { index: usize, value: f64 },

    /// A squared norm was negative or not finite.
    #[error("invalid squared norm {value}")]
    InvalidNorm { value: f64 },

    /// The background task running the computation did not complete.
    #[error("summarize task failed: {0}")]
    TaskFailed(String),
}

/// Coarse classification of [`SummarizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidState,
    NumericDomain,
    TaskFailed,
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::EmptyInput => ErrorKind::EmptyInput,
            SummarizeError::ZeroDocumentFrequency { .. } | SummarizeError::MissingIdf { .. } => {
                ErrorKind::InvalidState
            }
            SummarizeError::NumericDomain { .. } | SummarizeError::InvalidNorm { .. } => {
                ErrorKind::NumericDomain
            }
            SummarizeError::TaskFailed(_) => ErrorKind::TaskFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
