//! Error types for sqlgen.
//!
//! The render path is total: `find` and `condition` never fail, whatever the
//! shape of the input tree. Errors exist only for the opt-in validating
//! constructors, currently [`Identifier::parse`](crate::Identifier::parse).

use thiserror::Error;

/// Result type alias for sqlgen operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Error type for fallible construction APIs.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An identifier failed lexical validation.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl BuildError {
    /// Create an invalid-identifier error.
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }
}
