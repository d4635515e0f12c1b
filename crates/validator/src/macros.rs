//! Macros for selecting properties and projecting user types.
//!
//! # Available Macros
//!
//! - [`property!`]: compile-time checked property selector
//! - [`enum_value!`]: project fieldless enums onto their discriminant and name
//! - [`opaque_value!`]: mark model types the checks never inspect
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulekit_validator::{enum_value, property};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Role { Reader, Editor, Admin }
//! enum_value!(Role);
//!
//! rules.rule_for(property!(User => first_name)).not_empty();
//! rules.rule_for(property!(User => settings.theme)).is_in(["light".to_owned(), "dark".to_owned()]);
//! ```

// ============================================================================
// PROPERTY MACRO
// ============================================================================

/// Selects a property of a model by field path.
///
/// The path is compiled as ordinary field access, so anything that is not a
/// field path is rejected by the compiler. The value is cloned out of the
/// model, and the display name is derived from the last segment.
///
/// ```rust,ignore
/// let first_name = property!(User => first_name);
/// assert_eq!(first_name.display_name(NameStyle::Pascal), "FirstName");
///
/// let city = property!(User => address.city);
/// assert_eq!(city.selector(), "address.city");
/// ```
#[macro_export]
macro_rules! property {
    ($model:ty => $($segment:ident).+) => {
        $crate::foundation::Property::<$model, _>::from_segments(
            &[$(stringify!($segment)),+],
            |model: &$model| ::core::clone::Clone::clone(&model.$($segment).+),
        )
    };
}

// ============================================================================
// VALUE PROJECTION MACROS
// ============================================================================

/// Implements [`AsValue`](crate::foundation::AsValue) for fieldless `Copy`
/// enums, projecting each variant to its discriminant, and
/// [`DisplayValue`](crate::foundation::DisplayValue) through the enum's
/// `Debug` output so variants can be used with `equal` and `is_in`.
///
/// Combine with [`Rule::is_in_enum`](crate::Rule::is_in_enum) and a
/// `TryFrom<i64>` implementation to reject out-of-range raw values.
#[macro_export]
macro_rules! enum_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::AsValue for $ty {
                fn as_value(&self) -> $crate::foundation::Value<'_> {
                    $crate::foundation::Value::Int(*self as i64)
                }
            }

            impl $crate::foundation::DisplayValue for $ty {
                fn display_value(&self) -> ::std::string::String {
                    ::std::format!("{self:?}")
                }
            }
        )+
    };
}

/// Implements [`AsValue`](crate::foundation::AsValue) as
/// [`Value::Opaque`](crate::foundation::Value::Opaque), so presence checks
/// such as `not_null` can be used on nested model properties.
#[macro_export]
macro_rules! opaque_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::AsValue for $ty {
                fn as_value(&self) -> $crate::foundation::Value<'_> {
                    $crate::foundation::Value::Opaque
                }
            }
        )+
    };
}
