//! Nested validation
//!
//! [`Rule::set_validator`] hands the resolved property value to a child
//! [`ValidatorBuilder`] and merges the child's messages into the parent's
//! result, each prefixed with the parent's display name:
//! `"UserInfo.Info is required"`. An absent child (`None`) is skipped; pair
//! the nested check with [`not_null`](Rule::not_null) when presence matters.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use super::{CheckKind, Rule};
use crate::builder::ValidatorBuilder;
use crate::foundation::ValidatorError;

// ============================================================================
// AS CHILD
// ============================================================================

/// Borrows the child model out of a property value, if there is one.
///
/// Implemented for the child type itself, `Option`, `Box` and `Arc`.
pub trait AsChild<C> {
    /// Returns the child model, or `None` when absent.
    fn as_child(&self) -> Option<&C>;
}

impl<C> AsChild<C> for C {
    fn as_child(&self) -> Option<&C> {
        Some(self)
    }
}

impl<C> AsChild<C> for Option<C> {
    fn as_child(&self) -> Option<&C> {
        self.as_ref()
    }
}

impl<C> AsChild<C> for Box<C> {
    fn as_child(&self) -> Option<&C> {
        Some(self)
    }
}

impl<C> AsChild<C> for Arc<C> {
    fn as_child(&self) -> Option<&C> {
        Some(self)
    }
}

// ============================================================================
// NESTED VALIDATION
// ============================================================================

pub(crate) trait NestedValidation<P>: Send + Sync {
    fn validate_into(&self, value: &P, parent: &str, errors: &mut Vec<String>);

    fn validate_into_async<'a>(
        &'a self,
        value: &'a P,
        parent: &'a str,
        cancel: &'a CancellationToken,
        errors: &'a mut Vec<String>,
    ) -> BoxFuture<'a, Result<(), ValidatorError>>;

    fn is_async(&self) -> bool;
}

struct ChildValidator<C> {
    child: Arc<ValidatorBuilder<C>>,
}

fn prefixed(parent: &str, messages: Vec<String>) -> impl Iterator<Item = String> {
    messages
        .into_iter()
        .map(move |message| format!("{parent}.{message}"))
}

impl<P, C> NestedValidation<P> for ChildValidator<C>
where
    P: AsChild<C> + Sync,
    C: Sync + 'static,
{
    fn validate_into(&self, value: &P, parent: &str, errors: &mut Vec<String>) {
        let Some(child) = value.as_child() else {
            return;
        };
        let result = self.child.validate(child);
        errors.extend(prefixed(parent, result.into_messages()));
    }

    fn validate_into_async<'a>(
        &'a self,
        value: &'a P,
        parent: &'a str,
        cancel: &'a CancellationToken,
        errors: &'a mut Vec<String>,
    ) -> BoxFuture<'a, Result<(), ValidatorError>> {
        Box::pin(async move {
            let Some(child) = value.as_child() else {
                return Ok(());
            };
            let result = self.child.validate_async(child, cancel).await?;
            errors.extend(prefixed(parent, result.into_messages()));
            Ok(())
        })
    }

    fn is_async(&self) -> bool {
        self.child.has_async_checks()
    }
}

// ============================================================================
// RULE METHODS
// ============================================================================

impl<M, P> Rule<M, P> {
    /// Validates the property value with a child builder.
    ///
    /// Child messages are merged as `"{DisplayName}.{message}"`. The check
    /// itself never emits a message, so [`with_message`](Self::with_message)
    /// does not apply to it.
    pub fn set_validator<C>(&mut self, child: ValidatorBuilder<C>) -> &mut Self
    where
        P: AsChild<C> + Sync + 'static,
        C: Sync + 'static,
    {
        self.set_shared_validator(Arc::new(child))
    }

    /// Like [`set_validator`](Self::set_validator) for a child builder shared
    /// with other rules or registries.
    pub fn set_shared_validator<C>(&mut self, child: Arc<ValidatorBuilder<C>>) -> &mut Self
    where
        P: AsChild<C> + Sync + 'static,
        C: Sync + 'static,
    {
        self.push(CheckKind::Nested(Box::new(ChildValidator { child })))
    }
}
