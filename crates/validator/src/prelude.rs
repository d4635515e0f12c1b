//! Prelude module for convenient imports.
//!
//! `use rulekit_validator::prelude::*;` brings in the builder, the rule
//! type, the result and error types, configuration, and the macros.

// ============================================================================
// FOUNDATION: Values, properties, results, configuration
// ============================================================================

pub use crate::foundation::{
    AsValue, CascadeMode, DisplayValue, LengthMode, NameStyle, Property, ValidResult,
    ValidatorConfig, ValidatorError, Value,
};

// ============================================================================
// RULES AND BUILDERS
// ============================================================================

pub use crate::abstract_validator::AbstractValidator;
pub use crate::builder::ValidatorBuilder;
pub use crate::registry::ValidatorRegistry;
pub use crate::rule::{AsChild, Ordered, Rule};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{enum_value, opaque_value, property};

// ============================================================================
// RE-EXPORTS: types that appear in the public API
// ============================================================================

pub use chrono::Weekday;
pub use tokio_util::sync::CancellationToken;
