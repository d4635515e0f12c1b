//! The outcome of one validation run.

use std::fmt;

use serde::Serialize;
use serde::ser::SerializeStruct;

/// Pass/fail outcome plus the ordered error messages of one `validate` call.
///
/// Messages keep rule registration order, then check append order. A result
/// is produced fresh per call and never mutated afterwards.
///
/// # Examples
///
/// ```rust,ignore
/// let result = validator.validate(&user);
/// if !result.is_valid() {
///     for message in result.error_messages() {
///         eprintln!("{message}");
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidResult {
    errors: Vec<String>,
}

impl ValidResult {
    /// Creates a result from collected messages.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// `true` when no check failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The ordered error messages.
    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }

    /// Number of error messages.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consumes the result, returning its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.errors
    }

    /// Converts into `Ok(())` when valid, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        write!(f, "{} validation error(s):", self.errors.len())?;
        for (index, message) in self.errors.iter().enumerate() {
            write!(f, "\n  {}. {message}", index + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidResult {}

impl Serialize for ValidResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidResult", 2)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("error_messages", &self.errors)?;
        state.end()
    }
}

impl<'a> IntoIterator for &'a ValidResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
