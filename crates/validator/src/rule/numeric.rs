//! Inclusive numeric bounds
//!
//! Only integer and float values are checked. Strings, dates and other kinds
//! pass, whatever they contain.

use std::cmp::Ordering;

use super::{Message, Rule};
use crate::foundation::AsValue;

impl<M, P: AsValue> Rule<M, P> {
    /// Fails when a numeric value lies outside `min..=max`.
    pub fn range(&mut self, min: i64, max: i64) -> &mut Self {
        self.push_value_test(
            move |value| {
                value.compare_number(min) != Some(Ordering::Less)
                    && value.compare_number(max) != Some(Ordering::Greater)
            },
            Message::template(move |name| format!("{name} must be between {min} and {max}.")),
        )
    }

    /// Fails when a numeric value is below `min`.
    ///
    /// Default message: `"{name} must be at least {min}."`.
    pub fn min(&mut self, min: i64) -> &mut Self {
        self.push_value_test(
            move |value| value.compare_number(min) != Some(Ordering::Less),
            Message::template(move |name| format!("{name} must be at least {min}.")),
        )
    }

    /// Fails when a numeric value is above `max`.
    ///
    /// Default message: `"{name} must be at most {max}."`.
    pub fn max(&mut self, max: i64) -> &mut Self {
        self.push_value_test(
            move |value| value.compare_number(max) != Some(Ordering::Greater),
            Message::template(move |name| format!("{name} must be at most {max}.")),
        )
    }
}
