//! Unified Error Model
use thiserror::Error;

/// Error type produced by caller-supplied fallible closures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Error, Debug)]
pub enum SeqError {
    /// An erased value did not hold the element type the caller expected.
    #[error("TYPE/MISMATCH: {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// A caller-supplied closure failed for the element at `index`.
    #[error("ELEMENT/{index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("EMPTY/{context}: collection is empty")]
    Empty { context: &'static str },
}

impl SeqError {
    pub fn element(index: usize, source: impl Into<BoxError>) -> Self {
        Self::Element {
            index,
            source: source.into(),
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Borrow the caller's original error, if this is an element failure.
    pub fn element_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
