//! Per-property rule chains
//!
//! A [`Rule`] is bound to one property accessor and holds an ordered list of
//! checks. Fluent methods append checks and return the same rule, so a chain
//! reads top to bottom in the order the checks run:
//!
//! ```rust,ignore
//! rules
//!     .rule_for(property!(User => first_name))
//!     .not_empty()
//!     .min_length(2)
//!     .with_message("{PropertyName} is too short");
//! ```
//!
//! # Conditions
//!
//! - [`when`](Rule::when) gates the whole rule. A later `when` replaces it.
//! - [`only_if`](Rule::only_if) / [`unless`](Rule::unless) gate only the next
//!   appended check. The check takes the condition when it is appended, so
//!   every check owns its own condition and later calls cannot affect it.
//!
//! # Check families
//!
//! Each family lives in its own module and adds methods to [`Rule`]:
//! presence, membership, ordering, numeric, string, boolean, date, custom and
//! nested. Kind-specific checks match on the property's
//! [`Value`](crate::foundation::Value); values of another kind pass.

mod boolean;
mod custom;
mod date;
mod membership;
mod nested;
mod numeric;
mod ordering;
mod presence;
mod string;

use std::fmt;

use futures::executor::block_on;
use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::foundation::property::Accessor;
use crate::foundation::{AsValue, CascadeMode, Property, ValidatorConfig, ValidatorError, Value};

pub use nested::AsChild;
pub(crate) use nested::NestedValidation;
pub use ordering::Ordered;

pub(crate) type Condition<M> = Box<dyn Fn(&M) -> bool + Send + Sync>;
type Test<M, P> = Box<dyn Fn(&M, &P) -> bool + Send + Sync>;
type AsyncTest<P> = Box<dyn Fn(&P) -> BoxFuture<'static, bool> + Send + Sync>;
type Template = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Placeholder replaced with the display name in custom messages.
pub const PROPERTY_NAME: &str = "{PropertyName}";

// ============================================================================
// MESSAGE
// ============================================================================

pub(crate) enum Message {
    /// Default template, replaceable with `with_message`.
    Default(Template),
    /// Caller supplied text.
    Custom(String),
    /// Generated text that `with_message` does not replace.
    Fixed(Template),
}

impl Message {
    pub(crate) fn template<F>(render: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Default(Box::new(render))
    }

    pub(crate) fn fixed<F>(render: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Fixed(Box::new(render))
    }

    fn render(&self, name: &str) -> String {
        match self {
            Self::Default(render) | Self::Fixed(render) => render(name),
            Self::Custom(text) => text.replace(PROPERTY_NAME, name),
        }
    }

    fn is_overridable(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }
}

// ============================================================================
// CHECK
// ============================================================================

pub(crate) enum CheckKind<M, P> {
    Test { test: Test<M, P>, message: Message },
    Async { test: AsyncTest<P>, message: Message },
    Nested(Box<dyn NestedValidation<P>>),
}

struct Check<M, P> {
    condition: Option<Condition<M>>,
    kind: CheckKind<M, P>,
}

impl<M, P> Check<M, P> {
    fn applies(&self, model: &M) -> bool {
        self.condition
            .as_ref()
            .is_none_or(|condition| condition(model))
    }

    fn is_async(&self) -> bool {
        match &self.kind {
            CheckKind::Test { .. } => false,
            CheckKind::Async { .. } => true,
            CheckKind::Nested(child) => child.is_async(),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Ordered checks bound to one property of model `M`.
///
/// Created by [`ValidatorBuilder::rule_for`](crate::ValidatorBuilder::rule_for)
/// and owned by the builder. The display name used in default messages is
/// read when the rule runs, so [`override_property_name`](Self::override_property_name)
/// applies to every check of the rule, including ones appended earlier.
pub struct Rule<M, P> {
    name: String,
    accessor: Accessor<M, P>,
    gate: Option<Condition<M>>,
    pending: Option<Condition<M>>,
    checks: Vec<Check<M, P>>,
    config: ValidatorConfig,
}

impl<M, P> Rule<M, P> {
    pub(crate) fn new(property: Property<M, P>, config: ValidatorConfig) -> Self {
        Self {
            name: property.display_name(config.name_style),
            accessor: property.into_accessor(),
            gate: None,
            pending: None,
            checks: Vec::new(),
            config,
        }
    }

    /// The name substituted into default messages.
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if any check needs the async path.
    pub fn has_async_checks(&self) -> bool {
        self.checks.iter().any(Check::is_async)
    }

    /// Runs the whole rule only when `predicate` holds for the model.
    ///
    /// Replaces any earlier `when`. Does not append a check.
    pub fn when<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.gate = Some(Box::new(predicate));
        self
    }

    /// Runs the next appended check only when `predicate` holds.
    pub fn only_if<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.pending = Some(Box::new(predicate));
        self
    }

    /// Runs the next appended check only when `predicate` does not hold.
    pub fn unless<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.pending = Some(Box::new(move |model| !predicate(model)));
        self
    }

    /// Replaces the display name used by every check of this rule.
    pub fn override_property_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Replaces the message of the most recently appended check.
    ///
    /// `{PropertyName}` in `text` is replaced with the display name. Has no
    /// effect after [`one_of`](Self::one_of), [`none_of`](Self::none_of) or a
    /// nested validator.
    pub fn with_message(&mut self, text: impl Into<String>) -> &mut Self {
        match self.checks.last_mut().map(|check| &mut check.kind) {
            Some(CheckKind::Test { message, .. } | CheckKind::Async { message, .. })
                if message.is_overridable() =>
            {
                *message = Message::Custom(text.into());
            }
            _ => debug!(rule = %self.name, "with_message has no replaceable message to apply to"),
        }
        self
    }

    pub(crate) fn push(&mut self, kind: CheckKind<M, P>) -> &mut Self {
        let condition = self.pending.take();
        self.checks.push(Check { condition, kind });
        self
    }

    pub(crate) fn push_test<F>(&mut self, test: F, message: Message) -> &mut Self
    where
        F: Fn(&M, &P) -> bool + Send + Sync + 'static,
    {
        self.push(CheckKind::Test {
            test: Box::new(test),
            message,
        })
    }

    pub(crate) fn push_value_test<F>(&mut self, test: F, message: Message) -> &mut Self
    where
        P: AsValue,
        F: Fn(Value<'_>) -> bool + Send + Sync + 'static,
    {
        self.push_test(move |_, value| test(value.as_value()), message)
    }

    fn is_gated_off(&self, model: &M) -> bool {
        let gated_off = self.gate.as_ref().is_some_and(|gate| !gate(model));
        if gated_off {
            trace!(rule = %self.name, "rule skipped by its when condition");
        }
        gated_off
    }

    fn stops_after(&self, before: usize, errors: &[String]) -> bool {
        self.config.cascade == CascadeMode::Stop && errors.len() > before
    }

    pub(crate) fn evaluate(&self, model: &M, errors: &mut Vec<String>) {
        if self.is_gated_off(model) {
            return;
        }
        let value = (self.accessor)(model);
        for check in &self.checks {
            if !check.applies(model) {
                continue;
            }
            let before = errors.len();
            match &check.kind {
                CheckKind::Test { test, message } => {
                    if !test(model, &value) {
                        errors.push(message.render(&self.name));
                    }
                }
                CheckKind::Async { test, message } => {
                    trace!(rule = %self.name, "blocking on asynchronous check");
                    if !block_on(test(&value)) {
                        errors.push(message.render(&self.name));
                    }
                }
                CheckKind::Nested(child) => child.validate_into(&value, &self.name, errors),
            }
            if self.stops_after(before, errors) {
                break;
            }
        }
    }

    pub(crate) async fn evaluate_async(
        &self,
        model: &M,
        cancel: &CancellationToken,
        errors: &mut Vec<String>,
    ) -> Result<(), ValidatorError> {
        if self.is_gated_off(model) {
            return Ok(());
        }
        let value = (self.accessor)(model);
        for check in &self.checks {
            if cancel.is_cancelled() {
                return Err(ValidatorError::Cancelled);
            }
            if !check.applies(model) {
                continue;
            }
            let before = errors.len();
            match &check.kind {
                CheckKind::Test { test, message } => {
                    if !test(model, &value) {
                        errors.push(message.render(&self.name));
                    }
                }
                CheckKind::Async { test, message } => {
                    if !test(&value).await {
                        errors.push(message.render(&self.name));
                    }
                }
                CheckKind::Nested(child) => {
                    child
                        .validate_into_async(&value, &self.name, cancel, errors)
                        .await?;
                }
            }
            if self.stops_after(before, errors) {
                break;
            }
        }
        Ok(())
    }
}

impl<M, P> fmt::Debug for Rule<M, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("checks", &self.checks.len())
            .field("gated", &self.gate.is_some())
            .field("config", &self.config)
            .finish()
    }
}
