//! Equality and membership checks
//!
//! Lists are captured when the check is appended and rendered into the
//! message once. [`one_of`](Rule::one_of) and [`none_of`](Rule::none_of)
//! always report the generated option list, even after
//! [`with_message`](Rule::with_message).
//!
//! Expected values are rendered with [`DisplayValue`], so `Option`
//! properties compare against `Some(..)`/`None` and print `None` as `null`.

use super::{Message, Rule};
use crate::foundation::{AsValue, DisplayValue, Value};

fn join<T: DisplayValue>(items: &[T]) -> String {
    items
        .iter()
        .map(DisplayValue::display_value)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<M, P> Rule<M, P>
where
    P: PartialEq + DisplayValue + Send + Sync + 'static,
{
    /// Fails unless the value equals `expected`.
    pub fn equal(&mut self, expected: P) -> &mut Self {
        let shown = expected.display_value();
        self.push_test(
            move |_, value| *value == expected,
            Message::template(move |name| format!("{name} must be equal to {shown}.")),
        )
    }

    /// Fails when the value equals `unexpected`.
    pub fn not_equal(&mut self, unexpected: P) -> &mut Self {
        let shown = unexpected.display_value();
        self.push_test(
            move |_, value| *value != unexpected,
            Message::template(move |name| format!("{name} must not be equal to {shown}.")),
        )
    }

    /// Fails unless the value is in `allowed`.
    pub fn is_in(&mut self, allowed: impl IntoIterator<Item = P>) -> &mut Self {
        let allowed: Vec<P> = allowed.into_iter().collect();
        let shown = join(&allowed);
        self.push_test(
            move |_, value| allowed.contains(value),
            Message::template(move |name| format!("{name} must be one of: {shown}.")),
        )
    }

    /// Fails when the value is in `denied`.
    pub fn not_in(&mut self, denied: impl IntoIterator<Item = P>) -> &mut Self {
        let denied: Vec<P> = denied.into_iter().collect();
        let shown = join(&denied);
        self.push_test(
            move |_, value| !denied.contains(value),
            Message::template(move |name| format!("{name} must not be one of: {shown}.")),
        )
    }

    /// Fails unless the value is one of `options`; the message always lists them.
    pub fn one_of(&mut self, options: impl IntoIterator<Item = P>) -> &mut Self {
        let options: Vec<P> = options.into_iter().collect();
        let shown = join(&options);
        self.push_test(
            move |_, value| options.contains(value),
            Message::fixed(move |name| {
                format!("{name} must be one of the following values: {shown}")
            }),
        )
    }

    /// Fails when the value is one of `options`; the message always lists them.
    pub fn none_of(&mut self, options: impl IntoIterator<Item = P>) -> &mut Self {
        let options: Vec<P> = options.into_iter().collect();
        let shown = join(&options);
        self.push_test(
            move |_, value| !options.contains(value),
            Message::fixed(move |name| {
                format!("{name} must not be one of the following values: {shown}")
            }),
        )
    }
}

impl<M, P: AsValue> Rule<M, P> {
    /// Fails unless an integer value is a declared member of enum `E`.
    ///
    /// Membership is decided by `E: TryFrom<i64>`. `None` fails; values that
    /// are not integers pass. Enum-typed properties project through
    /// [`enum_value!`](crate::enum_value).
    pub fn is_in_enum<E>(&mut self) -> &mut Self
    where
        E: TryFrom<i64> + 'static,
    {
        self.push_value_test(
            |value| match value {
                Value::Null => false,
                Value::Int(raw) => E::try_from(raw).is_ok(),
                Value::UInt(raw) => i64::try_from(raw).is_ok_and(|raw| E::try_from(raw).is_ok()),
                _ => true,
            },
            Message::template(|name| format!("{name} must be a valid enum value.")),
        )
    }
}
