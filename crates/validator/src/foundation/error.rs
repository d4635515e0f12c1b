//! Configuration and execution errors.
//!
//! Validation *failures* are not errors: they are collected into a
//! [`ValidResult`](crate::foundation::ValidResult). [`ValidatorError`] covers
//! the cases where validation cannot run at all: a bad selector or pattern at
//! registration time, a model of the wrong type, a missing registration, or a
//! cancelled async run.

use std::borrow::Cow;

/// Errors raised while configuring or running a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The property selector is not a dotted property path.
    #[error("invalid property selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The rejected selector text.
        selector: String,
        /// Why it was rejected.
        reason: Cow<'static, str>,
    },

    /// A `matches` pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler diagnostic from the regex engine.
        reason: String,
    },

    /// The object-typed entry point received a model of another type.
    #[error("validator for `{expected}` cannot validate a model of a different type")]
    ModelTypeMismatch {
        /// Model type the validator was built for.
        expected: &'static str,
    },

    /// No validator is registered for the model type.
    #[error("no validator registered for `{model}`")]
    NotRegistered {
        /// Model type that was looked up.
        model: String,
    },

    /// Async validation observed a cancelled token between steps.
    #[error("validation was cancelled")]
    Cancelled,

    /// A configuration document could not be parsed.
    #[error("invalid validator configuration: {0}")]
    InvalidConfig(String),
}

impl ValidatorError {
    /// Creates an [`InvalidSelector`](Self::InvalidSelector) error.
    pub fn invalid_selector(
        selector: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`InvalidPattern`](Self::InvalidPattern) error from a regex failure.
    pub fn invalid_pattern(pattern: impl Into<String>, source: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: source.to_string(),
        }
    }

    /// Returns `true` for errors raised while configuring rules.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelector { .. } | Self::InvalidPattern { .. } | Self::InvalidConfig(_)
        )
    }

    /// Returns `true` if this is a cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<serde_json::Error> for ValidatorError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidConfig(error.to_string())
    }
}
