//! The per-model validator
//!
//! [`ValidatorBuilder`] owns the rules registered for one model type and runs
//! them. It is configuration, not per-run state: every call to
//! [`validate`](ValidatorBuilder::validate) starts from an empty accumulator,
//! so a builder can be shared and called repeatedly, including concurrently
//! once its rules are registered.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulekit_validator::prelude::*;
//!
//! let mut rules = ValidatorBuilder::<User>::new();
//! rules.rule_for(property!(User => first_name)).not_empty().min_length(2);
//! rules.rule_for(property!(User => email)).is_email();
//! rules.rule_for(property!(User => age)).range(1, 120);
//!
//! let result = rules.validate(&user);
//! assert!(result.is_valid());
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::ptr;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::foundation::{Property, ValidResult, ValidatorConfig, ValidatorError};
use crate::rule::Rule;

// ============================================================================
// RULE RUNNER
// ============================================================================

/// Type-erased view of a [`Rule`] so rules over different property types can
/// share one list.
pub(crate) trait RuleRunner<M>: Send + Sync {
    fn run(&self, model: &M, errors: &mut Vec<String>);

    fn run_async<'a>(
        &'a self,
        model: &'a M,
        cancel: &'a CancellationToken,
        errors: &'a mut Vec<String>,
    ) -> BoxFuture<'a, Result<(), ValidatorError>>;

    fn has_async_checks(&self) -> bool;
}

impl<M, P> RuleRunner<M> for Rule<M, P>
where
    M: Sync + 'static,
    P: Send + Sync + 'static,
{
    fn run(&self, model: &M, errors: &mut Vec<String>) {
        self.evaluate(model, errors);
    }

    fn run_async<'a>(
        &'a self,
        model: &'a M,
        cancel: &'a CancellationToken,
        errors: &'a mut Vec<String>,
    ) -> BoxFuture<'a, Result<(), ValidatorError>> {
        Box::pin(self.evaluate_async(model, cancel, errors))
    }

    fn has_async_checks(&self) -> bool {
        Rule::has_async_checks(self)
    }
}

// ============================================================================
// VALIDATOR BUILDER
// ============================================================================

/// Ordered rules for model type `M`.
pub struct ValidatorBuilder<M> {
    rules: Vec<Box<dyn RuleRunner<M>>>,
    config: ValidatorConfig,
}

impl<M> ValidatorBuilder<M> {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates an empty builder with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// The configuration copied into every rule registered from now on.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` if any rule holds an asynchronous check, including ones
    /// inside nested validators.
    pub fn has_async_checks(&self) -> bool {
        self.rules.iter().any(|rule| rule.has_async_checks())
    }
}

impl<M: Sync + 'static> ValidatorBuilder<M> {
    /// Registers a new rule for `property` and returns it for chaining.
    ///
    /// Selecting the same property twice creates two independent rules; both
    /// run.
    #[allow(unsafe_code)]
    pub fn rule_for<P>(&mut self, property: Property<M, P>) -> &mut Rule<M, P>
    where
        P: Send + Sync + 'static,
    {
        trace!(
            model = type_name::<M>(),
            selector = property.selector(),
            "registering rule"
        );
        let slot = self.rules.len();
        self.rules.push(Box::new(Rule::new(property, self.config)));
        let erased = ptr::from_mut(self.rules[slot].as_mut());
        // SAFETY: the box at `slot` was created from a `Rule<M, P>` just above,
        // so the erased pointer addresses a live `Rule<M, P>`. The returned
        // borrow is tied to `&mut self`, which keeps the list from changing
        // while it is alive.
        unsafe { &mut *erased.cast::<Rule<M, P>>() }
    }

    /// Runs every rule against `model`.
    ///
    /// Messages come back in rule registration order, then check append
    /// order. Asynchronous checks are driven to completion on the calling
    /// thread, so the result is the same as from
    /// [`validate_async`](Self::validate_async). Checks whose futures need a
    /// runtime (timers, sockets) must go through `validate_async` instead.
    pub fn validate(&self, model: &M) -> ValidResult {
        let mut errors = Vec::new();
        for rule in &self.rules {
            rule.run(model, &mut errors);
        }
        debug!(
            model = type_name::<M>(),
            rules = self.rules.len(),
            errors = errors.len(),
            "validation finished"
        );
        ValidResult::new(errors)
    }

    /// Runs every rule against `model`, awaiting asynchronous checks in place.
    ///
    /// Rules and checks run strictly in sequence, so the messages match the
    /// order [`validate`](Self::validate) would produce. `cancel` is checked
    /// before every rule and every check; an in-flight check is never
    /// interrupted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Cancelled`] if `cancel` fires before the run
    /// completes. Partial messages are discarded.
    pub async fn validate_async(
        &self,
        model: &M,
        cancel: &CancellationToken,
    ) -> Result<ValidResult, ValidatorError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            if cancel.is_cancelled() {
                debug!(model = type_name::<M>(), "async validation cancelled");
                return Err(ValidatorError::Cancelled);
            }
            rule.run_async(model, cancel, &mut errors).await?;
        }
        debug!(
            model = type_name::<M>(),
            rules = self.rules.len(),
            errors = errors.len(),
            "async validation finished"
        );
        Ok(ValidResult::new(errors))
    }

    /// Object-typed entry point.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::ModelTypeMismatch`] when `model` is not an `M`.
    pub fn validate_dyn(&self, model: &dyn Any) -> Result<ValidResult, ValidatorError> {
        model
            .downcast_ref::<M>()
            .map(|model| self.validate(model))
            .ok_or(ValidatorError::ModelTypeMismatch {
                expected: type_name::<M>(),
            })
    }
}

impl<M> Default for ValidatorBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for ValidatorBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("model", &type_name::<M>())
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .finish()
    }
}
