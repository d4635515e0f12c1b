//! # rulekit-validator
//!
//! Declarative, fluent rule validation for typed records.
//!
//! Rules are attached to properties of a model type, run against an instance,
//! and reported as an ordered list of human-readable messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rulekit_validator::prelude::*;
//!
//! let mut rules = ValidatorBuilder::<User>::new();
//! rules.rule_for(property!(User => first_name)).not_empty().min_length(2);
//! rules.rule_for(property!(User => email)).is_email();
//! rules.rule_for(property!(User => age)).range(1, 120);
//!
//! let result = rules.validate(&User { first_name: "".into(), email: "janXd".into(), age: 200 });
//! assert_eq!(result.error_messages(), [
//!     "FirstName cannot be empty",
//!     "FirstName length must be at least 2 characters.",
//!     "Email is not a valid email",
//!     "Age must be between 1 and 120.",
//! ]);
//! ```
//!
//! ## Execution
//!
//! - [`ValidatorBuilder::validate`] runs rules in registration order and
//!   checks in append order.
//! - [`ValidatorBuilder::validate_async`] runs the same sequence, awaiting
//!   asynchronous checks in place and honouring a cancellation token.
//! - Nested models are validated with [`Rule::set_validator`]; their messages
//!   are prefixed with the parent's display name.
//!
//! ## Named validators
//!
//! Implement [`AbstractValidator`] to bundle a model's rules under a name, and
//! register it in a [`ValidatorRegistry`] to look it up by model type.

// The fluent API stores closures behind trait objects; spelling the boxed
// types out is clearer than another layer of aliases.
#![allow(clippy::type_complexity)]

#[macro_use]
mod macros;

pub mod abstract_validator;
pub mod builder;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod rule;

pub use abstract_validator::AbstractValidator;
pub use builder::ValidatorBuilder;
pub use foundation::{ValidResult, ValidatorError};
pub use registry::ValidatorRegistry;
pub use rule::Rule;
