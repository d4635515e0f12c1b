//! Tagged value model
//!
//! Kind-specific checks (string, numeric, date, presence) do not look at the
//! property type directly. They look at its [`Value`] projection and pattern
//! match the variants they understand; every other variant passes. A string
//! check attached to a numeric property is therefore a no-op rather than a
//! failure.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

// ============================================================================
// VALUE
// ============================================================================

/// Borrowed, tagged view of a property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Absent value (`None`).
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer, or an enum discriminant.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A string slice.
    Str(&'a str),
    /// A local wall-clock timestamp.
    Date(NaiveDateTime),
    /// A sequence or collection, by length.
    Seq(usize),
    /// Anything the engine does not inspect.
    Opaque,
}

impl Value<'_> {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Null, whitespace-only strings and empty sequences are blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.trim().is_empty(),
            Self::Seq(len) => *len == 0,
            _ => false,
        }
    }

    /// Compares a numeric value against an integer bound.
    ///
    /// Returns `None` for non-numeric values and for NaN.
    pub fn compare_number(&self, bound: i64) -> Option<Ordering> {
        match *self {
            Self::Int(v) => Some(v.cmp(&bound)),
            Self::UInt(v) => Some(i64::try_from(v).map_or(Ordering::Greater, |v| v.cmp(&bound))),
            Self::Float(v) => v.partial_cmp(&(bound as f64)),
            _ => None,
        }
    }
}

// ============================================================================
// AS VALUE
// ============================================================================

/// Projects a property value onto [`Value`].
///
/// Implemented for strings, numbers, booleans, chrono dates, collections and
/// the usual wrappers. Use [`enum_value!`](crate::enum_value) for fieldless
/// enums and [`opaque_value!`](crate::opaque_value) for nested model types.
pub trait AsValue {
    /// Returns the tagged view of `self`.
    fn as_value(&self) -> Value<'_>;
}

macro_rules! impl_as_value {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl AsValue for $ty {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn as_value(&self) -> Value<'_> {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_as_value!(Int as i64: i8, i16, i32, i64, isize);
impl_as_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_as_value!(Float as f64: f32, f64);

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for Cow<'_, str> {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for NaiveDateTime {
    fn as_value(&self) -> Value<'_> {
        Value::Date(*self)
    }
}

impl AsValue for NaiveDate {
    fn as_value(&self) -> Value<'_> {
        Value::Date(self.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> AsValue for DateTime<Tz> {
    fn as_value(&self) -> Value<'_> {
        Value::Date(self.with_timezone(&Local).naive_local())
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, AsValue::as_value)
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Arc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T> AsValue for [T] {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<T, const N: usize> AsValue for [T; N] {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(N)
    }
}

impl<T> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<T> AsValue for VecDeque<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<T, S> AsValue for HashSet<T, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<T> AsValue for BTreeSet<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<K, V, S> AsValue for HashMap<K, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

impl<K, V> AsValue for BTreeMap<K, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Seq(self.len())
    }
}

// ============================================================================
// DISPLAY VALUE
// ============================================================================

/// Renders a value into a default message.
///
/// Equality and membership checks print their expected values with this, so
/// they work on `Option` properties (`None` renders as `null`) and on enums
/// declared with [`enum_value!`](crate::enum_value), which render through
/// `Debug`. Implement it for your own types to use them with those checks.
pub trait DisplayValue {
    /// Returns the text shown in messages.
    fn display_value(&self) -> String;
}

macro_rules! impl_display_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DisplayValue for $ty {
                fn display_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_display_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, NaiveDate, NaiveDateTime, NaiveTime, Weekday,
);

impl DisplayValue for Cow<'_, str> {
    fn display_value(&self) -> String {
        self.to_string()
    }
}

impl<Tz: TimeZone> DisplayValue for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn display_value(&self) -> String {
        self.to_string()
    }
}

impl<T: DisplayValue> DisplayValue for Option<T> {
    fn display_value(&self) -> String {
        self.as_ref()
            .map_or_else(|| "null".to_owned(), DisplayValue::display_value)
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for &T {
    fn display_value(&self) -> String {
        (**self).display_value()
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for Box<T> {
    fn display_value(&self) -> String {
        (**self).display_value()
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for Arc<T> {
    fn display_value(&self) -> String {
        (**self).display_value()
    }
}

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn display_value(&self) -> String {
        let items: Vec<String> = self.iter().map(DisplayValue::display_value).collect();
        format!("[{}]", items.join(", "))
    }
}
