//! Errors raised while loading vocabulary tables

use thiserror::Error;

/// Errors that can occur while loading or validating vocabulary tables.
///
/// Lookups themselves never fail; unknown labels resolve to the `other`
/// bucket. Errors exist only at the configuration-load boundary.
#[derive(Debug, Error, Clone)]
pub enum TerminologyError {
    /// Vocabulary file could not be read
    #[error("IO error: {message}")]
    Io { message: String },

    /// Vocabulary document is not valid JSON for the table schema
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Vocabulary document parsed but is internally inconsistent
    #[error("Invalid vocabulary: {message}")]
    Invalid { message: String },
}

impl TerminologyError {
    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
