//! Self-configuring validators
//!
//! [`AbstractValidator`] names a validator for one model type. It is sugar
//! over [`ValidatorBuilder`]: [`build`](AbstractValidator::build) creates a
//! builder and passes it to [`configure`](AbstractValidator::configure), so
//! the result behaves exactly like a builder configured by hand.
//!
//! ```rust,ignore
//! struct UserValidator;
//!
//! impl AbstractValidator for UserValidator {
//!     type Model = User;
//!
//!     fn configure(rules: &mut ValidatorBuilder<User>) -> Result<(), ValidatorError> {
//!         rules.rule_for(property!(User => first_name)).not_empty().min_length(2);
//!         rules.rule_for(property!(User => email)).is_email();
//!         Ok(())
//!     }
//! }
//!
//! let result = UserValidator::build()?.validate(&user);
//! ```

use crate::builder::ValidatorBuilder;
use crate::foundation::{ValidatorConfig, ValidatorError};

/// A named validator that registers its own rules.
pub trait AbstractValidator {
    /// The model type this validator checks.
    type Model: Sync + 'static;

    /// Registers the rules for [`Model`](Self::Model).
    ///
    /// # Errors
    ///
    /// Propagates configuration errors such as an invalid selector or pattern.
    fn configure(rules: &mut ValidatorBuilder<Self::Model>) -> Result<(), ValidatorError>;

    /// Configuration for the builder passed to [`configure`](Self::configure).
    fn config() -> ValidatorConfig {
        ValidatorConfig::default()
    }

    /// Builds a configured validator.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error raised by
    /// [`configure`](Self::configure).
    fn build() -> Result<ValidatorBuilder<Self::Model>, ValidatorError> {
        let mut rules = ValidatorBuilder::with_config(Self::config());
        Self::configure(&mut rules)?;
        Ok(rules)
    }
}
