//! Custom predicates
//!
//! `must` sees the property value, `must_with` also sees the model, and
//! `custom` sees neither, which suits checks against external state captured
//! in the closure. The `_async` variants are awaited in place by
//! [`validate_async`](crate::ValidatorBuilder::validate_async) and blocked on
//! by [`validate`](crate::ValidatorBuilder::validate).
//!
//! Every check here defaults to `"{name} is not valid."`.

use std::future::Future;

use futures::FutureExt;

use super::{CheckKind, Message, Rule};

fn not_valid() -> Message {
    Message::template(|name| format!("{name} is not valid."))
}

impl<M, P> Rule<M, P> {
    /// Fails when `predicate` returns `false` for the value.
    ///
    /// Default message: `"{name} is not valid."`.
    pub fn must<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        self.push_test(move |_, value| predicate(value), not_valid())
    }

    /// Fails when `predicate` returns `false` for the model and value.
    pub fn must_with<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&M, &P) -> bool + Send + Sync + 'static,
    {
        self.push_test(predicate, not_valid())
    }

    /// Fails when `predicate` returns `false`. The value is not consulted.
    ///
    /// Default message: `"{name} is not valid."`.
    pub fn custom<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.push_test(move |_, _| predicate(), not_valid())
    }

    /// Awaits `predicate` with a clone of the value.
    pub fn must_async<F, Fut>(&mut self, predicate: F) -> &mut Self
    where
        P: Clone,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.push(CheckKind::Async {
            test: Box::new(move |value: &P| predicate(value.clone()).boxed()),
            message: not_valid(),
        })
    }

    /// Awaits `predicate`. The value is not consulted.
    pub fn custom_async<F, Fut>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.push(CheckKind::Async {
            test: Box::new(move |_: &P| predicate().boxed()),
            message: not_valid(),
        })
    }
}
