//! Errors raised when quads violate the data model.

use std::fmt;

use crate::term::{Term, TermPosition};

/// Errors that can arise when building or converting quads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A term sits in a position the data model forbids (e.g. a literal subject).
    InvalidTermPosition { position: TermPosition, term: Term },
    /// The input uses a feature this store does not model.
    Unsupported(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidTermPosition { position, term } => {
                write!(f, "invalid term position: {} cannot be {}", position, term)
            }
            StoreError::Unsupported(m) => write!(f, "unsupported: {}", m),
        }
    }
}

impl std::error::Error for StoreError {}
