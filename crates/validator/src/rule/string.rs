//! String checks
//!
//! Every check here only looks at string values; `None` and other kinds
//! pass. Lengths are counted with the builder's [`LengthMode`].
//!
//! [`LengthMode`]: crate::foundation::LengthMode

use regex::Regex;

use super::{Message, Rule};
use crate::foundation::{AsValue, ValidatorError, Value};

impl<M, P: AsValue> Rule<M, P> {
    /// Fails when the length lies outside `min..=max`.
    pub fn length(&mut self, min: usize, max: usize) -> &mut Self {
        let mode = self.config.length_mode;
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => (min..=max).contains(&mode.measure(s)),
                _ => true,
            },
            Message::template(move |name| {
                format!("{name} length must be between {min} and {max} characters.")
            }),
        )
    }

    /// Fails when shorter than `min`.
    ///
    /// Default message: `"{name} length must be at least {min} characters."`.
    pub fn min_length(&mut self, min: usize) -> &mut Self {
        let mode = self.config.length_mode;
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => mode.measure(s) >= min,
                _ => true,
            },
            Message::template(move |name| {
                format!("{name} length must be at least {min} characters.")
            }),
        )
    }

    /// Fails when longer than `max`.
    ///
    /// Default message: `"{name} length must be at most {max} characters."`.
    pub fn max_length(&mut self, max: usize) -> &mut Self {
        let mode = self.config.length_mode;
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => mode.measure(s) <= max,
                _ => true,
            },
            Message::template(move |name| {
                format!("{name} length must be at most {max} characters.")
            }),
        )
    }

    /// Fails unless the string contains `@`.
    ///
    /// Deliberately loose: it catches typos, not RFC 5322 violations.
    pub fn is_email(&mut self) -> &mut Self {
        self.push_value_test(
            |value| match value {
                Value::Str(s) => s.contains('@'),
                _ => true,
            },
            Message::template(|name| format!("{name} is not a valid email")),
        )
    }

    /// Fails unless the string is a well-formed absolute URL.
    pub fn is_url(&mut self) -> &mut Self {
        self.push_value_test(
            |value| match value {
                Value::Str(s) => is_absolute_url(s),
                _ => true,
            },
            Message::template(|name| format!("{name} is not a valid URL.")),
        )
    }

    /// Fails unless every character is alphabetic.
    pub fn is_alpha(&mut self) -> &mut Self {
        self.push_value_test(
            |value| match value {
                Value::Str(s) => s.chars().all(char::is_alphabetic),
                _ => true,
            },
            Message::template(|name| format!("{name} must contain only letters.")),
        )
    }

    /// Fails unless every character is alphanumeric.
    pub fn is_alphanumeric(&mut self) -> &mut Self {
        self.push_value_test(
            |value| match value {
                Value::Str(s) => s.chars().all(char::is_alphanumeric),
                _ => true,
            },
            Message::template(|name| format!("{name} must be alphanumeric.")),
        )
    }

    /// Fails unless the string starts with `prefix`.
    pub fn starts_with(&mut self, prefix: impl Into<String>) -> &mut Self {
        let prefix = prefix.into();
        let shown = prefix.clone();
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => s.starts_with(prefix.as_str()),
                _ => true,
            },
            Message::template(move |name| format!("{name} must start with '{shown}'.")),
        )
    }

    /// Fails unless the string ends with `suffix`.
    pub fn ends_with(&mut self, suffix: impl Into<String>) -> &mut Self {
        let suffix = suffix.into();
        let shown = suffix.clone();
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => s.ends_with(suffix.as_str()),
                _ => true,
            },
            Message::template(move |name| format!("{name} must end with '{shown}'.")),
        )
    }

    /// Compiles `pattern` and fails when the string has no match.
    ///
    /// The pattern is searched, not anchored; write `^…$` for a whole-string
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPattern`] immediately if the pattern
    /// does not compile.
    pub fn matches(&mut self, pattern: &str) -> Result<&mut Self, ValidatorError> {
        let regex =
            Regex::new(pattern).map_err(|error| ValidatorError::invalid_pattern(pattern, &error))?;
        Ok(self.matches_regex(regex))
    }

    /// Fails when the string has no match for `regex`.
    pub fn matches_regex(&mut self, regex: Regex) -> &mut Self {
        self.push_value_test(
            move |value| match value {
                Value::Str(s) => regex.is_match(s),
                _ => true,
            },
            Message::template(|name| format!("{name} is not in the correct format.")),
        )
    }
}

fn is_absolute_url(input: &str) -> bool {
    !input.chars().any(char::is_whitespace) && url::Url::parse(input).is_ok()
}
