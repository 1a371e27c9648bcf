//! Document core errors
//!
//! Validation itself is boolean and never errors; the only failure here
//! is naming a document kind that does not exist.

use thiserror::Error;

/// Errors that can occur in the document core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A document kind name was not recognized
    #[error("Unknown document kind: {0}")]
    UnknownKind(String),
}
