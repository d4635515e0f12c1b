//! Property selection
//!
//! A [`Property`] pairs a selector path with the accessor that reads the
//! value off a model. Two ways to build one:
//!
//! - [`property!`](crate::property) expands to real field access, so a
//!   selector that is not a field path does not compile.
//! - [`Property::new`] takes a declarative selector string and an accessor
//!   closure; the selector is checked immediately and rejected with
//!   [`ValidatorError::InvalidSelector`] if it is not a dotted identifier path.
//!
//! Nullable nested paths are expressed through the accessor: return an
//! `Option` and a missing link projects to [`Value::Null`](super::Value::Null).
//!
//! ```rust,ignore
//! let city = Property::new("address.city", |u: &User| {
//!     u.address.as_ref().map(|a| a.city.clone())
//! })?;
//! ```

use std::fmt;

use super::{NameStyle, ValidatorError};

pub(crate) type Accessor<M, P> = Box<dyn Fn(&M) -> P + Send + Sync>;

/// A named property of model `M` resolving to a value of type `P`.
pub struct Property<M, P> {
    selector: String,
    accessor: Accessor<M, P>,
}

impl<M, P> Property<M, P> {
    /// Creates a property from a dotted selector path and its accessor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidSelector`] when `selector` is empty or
    /// any segment is not an identifier.
    pub fn new<F>(selector: &str, accessor: F) -> Result<Self, ValidatorError>
    where
        F: Fn(&M) -> P + Send + Sync + 'static,
    {
        check_selector(selector)?;
        Ok(Self {
            selector: selector.to_owned(),
            accessor: Box::new(accessor),
        })
    }

    /// Builds a property from identifier segments already checked by the
    /// compiler. Used by [`property!`](crate::property).
    #[doc(hidden)]
    pub fn from_segments<F>(segments: &[&str], accessor: F) -> Self
    where
        F: Fn(&M) -> P + Send + Sync + 'static,
    {
        Self {
            selector: segments.join("."),
            accessor: Box::new(accessor),
        }
    }

    /// The full selector path, e.g. `address.city`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The last selector segment, e.g. `city`.
    pub fn name(&self) -> &str {
        self.selector
            .rsplit('.')
            .next()
            .unwrap_or(self.selector.as_str())
    }

    /// Display name derived from [`name`](Self::name) in the given style.
    pub fn display_name(&self, style: NameStyle) -> String {
        style.apply(self.name())
    }

    /// Reads the property off a model.
    pub fn resolve(&self, model: &M) -> P {
        (self.accessor)(model)
    }

    pub(crate) fn into_accessor(self) -> Accessor<M, P> {
        self.accessor
    }
}

impl<M, P> fmt::Debug for Property<M, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("selector", &self.selector)
            .field("accessor", &"<function>")
            .finish()
    }
}

fn check_selector(selector: &str) -> Result<(), ValidatorError> {
    if selector.trim().is_empty() {
        return Err(ValidatorError::invalid_selector(selector, "selector is empty"));
    }
    for segment in selector.split('.') {
        if segment.is_empty() {
            return Err(ValidatorError::invalid_selector(
                selector,
                "selector contains an empty path segment",
            ));
        }
        if !is_identifier(segment) {
            return Err(ValidatorError::invalid_selector(
                selector,
                format!("`{segment}` is not a property name"),
            ));
        }
    }
    Ok(())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
