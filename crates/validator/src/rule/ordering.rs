//! Ordering checks against a threshold captured at append time.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::{Message, Rule};

// ============================================================================
// ORDERED
// ============================================================================

/// A property value that can be compared against a threshold.
///
/// `Option<T>` compares its inner value and passes when absent.
pub trait Ordered {
    /// Type of the threshold.
    type Bound: PartialOrd + Display;

    /// The comparable value, or `None` when there is nothing to compare.
    fn ordered(&self) -> Option<&Self::Bound>;
}

macro_rules! ordered_self {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Ordered for $ty {
                type Bound = $ty;

                #[inline]
                fn ordered(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )+
    };
}

ordered_self!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    char,
    String,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
);

impl<Tz> Ordered for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    type Bound = Self;

    fn ordered(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<T: Ordered> Ordered for Option<T> {
    type Bound = T::Bound;

    fn ordered(&self) -> Option<&T::Bound> {
        self.as_ref().and_then(Ordered::ordered)
    }
}

// ============================================================================
// RULE METHODS
// ============================================================================

impl<M, P> Rule<M, P>
where
    P: Ordered,
    P::Bound: Send + Sync + 'static,
{
    /// Fails unless the value is greater than `threshold`.
    pub fn greater_than(&mut self, threshold: P::Bound) -> &mut Self {
        let shown = threshold.to_string();
        self.push_test(
            move |_, value| value.ordered().is_none_or(|v| *v > threshold),
            Message::template(move |name| format!("{name} must be greater than {shown}.")),
        )
    }

    /// Fails unless the value is less than `threshold`.
    pub fn less_than(&mut self, threshold: P::Bound) -> &mut Self {
        let shown = threshold.to_string();
        self.push_test(
            move |_, value| value.ordered().is_none_or(|v| *v < threshold),
            Message::template(move |name| format!("{name} must be less than {shown}.")),
        )
    }

    /// Fails unless the value is greater than or equal to `threshold`.
    pub fn greater_than_or_equal(&mut self, threshold: P::Bound) -> &mut Self {
        let shown = threshold.to_string();
        self.push_test(
            move |_, value| value.ordered().is_none_or(|v| *v >= threshold),
            Message::template(move |name| {
                format!("{name} must be greater than or equal to {shown}.")
            }),
        )
    }

    /// Fails unless the value is less than or equal to `threshold`.
    pub fn less_than_or_equal(&mut self, threshold: P::Bound) -> &mut Self {
        let shown = threshold.to_string();
        self.push_test(
            move |_, value| value.ordered().is_none_or(|v| *v <= threshold),
            Message::template(move |name| format!("{name} must be less than or equal to {shown}.")),
        )
    }
}
