//! Boolean checks

use super::{Message, Rule};
use crate::foundation::{AsValue, Value};

impl<M, P: AsValue> Rule<M, P> {
    /// Fails when a boolean value is `false`.
    pub fn is_true(&mut self) -> &mut Self {
        self.push_value_test(
            |value| !matches!(value, Value::Bool(false)),
            Message::template(|name| format!("{name} must be true.")),
        )
    }

    /// Fails when a boolean value is `true`.
    pub fn is_false(&mut self) -> &mut Self {
        self.push_value_test(
            |value| !matches!(value, Value::Bool(true)),
            Message::template(|name| format!("{name} must be false.")),
        )
    }
}
