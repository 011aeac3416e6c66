//! Errors raised while loading guideline rule sets

use thiserror::Error;

/// Errors that can occur while loading a rule-set document.
///
/// Plan generation itself never fails; a missing locale falls back to the
/// baseline rule set instead of erroring.
#[derive(Debug, Error, Clone)]
pub enum GuidelineConfigError {
    /// Rule-set file could not be read
    #[error("IO error: {message}")]
    Io { message: String },

    /// Rule-set document is not valid JSON for the plan-config schema
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl GuidelineConfigError {
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
}
