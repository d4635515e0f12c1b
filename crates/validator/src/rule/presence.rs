//! Presence checks
//!
//! `None`, whitespace-only strings and empty collections count as empty.

use super::{Message, Rule};
use crate::foundation::AsValue;

impl<M, P: AsValue> Rule<M, P> {
    /// Fails when the value is `None`.
    pub fn not_null(&mut self) -> &mut Self {
        self.push_value_test(
            |value| !value.is_null(),
            Message::template(|name| format!("{name} cannot be null")),
        )
    }

    /// Fails when the value is present.
    pub fn is_null(&mut self) -> &mut Self {
        self.push_value_test(
            |value| value.is_null(),
            Message::template(|name| format!("{name} must be null")),
        )
    }

    /// Fails on `None`, blank strings and empty collections.
    pub fn not_empty(&mut self) -> &mut Self {
        self.push_value_test(
            |value| !value.is_blank(),
            Message::template(|name| format!("{name} cannot be empty")),
        )
    }

    /// Fails unless the value is `None`, blank or an empty collection.
    pub fn is_empty(&mut self) -> &mut Self {
        self.push_value_test(
            |value| value.is_blank(),
            Message::template(|name| format!("{name} must be empty")),
        )
    }
}
