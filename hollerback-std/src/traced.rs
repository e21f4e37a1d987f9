//! Registry wrapper that instruments dispatch with `tracing`.

use crate::registry::CallbackRegistry;
use hollerback_core::{MissingCallbackError, Operation, Respond};
use std::ops::{Deref, DerefMut};

/// A registry wrapper that records every dispatch as a `tracing` span.
///
/// Each dispatch enters a `debug` span carrying the operation and callback
/// name, and emits one `debug` event noting whether a callback was found.
/// Registration goes through to the wrapped registry via `Deref`.
///
/// # Example
///
/// ```rust
/// use hollerback_std::{Traced, hollerback_with};
///
/// let found = hollerback_with(
///     Traced::new_registry,
///     |on: &mut hollerback_std::CallbackRegistry<'static, (), ()>| {
///         on.register("success", |()| ());
///     },
///     |registry| registry.try_respond_with("success", ()).is_some(),
/// );
/// assert!(found);
/// ```
pub struct Traced<Reg> {
    inner: Reg,
}

impl<Reg> Traced<Reg> {
    /// Wrap a registry.
    pub const fn new(inner: Reg) -> Self {
        Self { inner }
    }

    /// Get the wrapped registry.
    pub fn inner(&self) -> &Reg {
        &self.inner
    }

    /// Unwrap the registry.
    pub fn into_inner(self) -> Reg {
        self.inner
    }

    /// Strict dispatch through the wrapped registry.
    pub fn respond_with<A, R>(&self, name: &str, args: A) -> Result<R, MissingCallbackError>
    where
        Reg: Respond<A, R>,
    {
        let span = tracing::debug_span!(
            "hollerback",
            operation = %Operation::RespondWith,
            callback = %name
        );
        let _enter = span.enter();

        let result = self.inner.respond_with(name, args);
        tracing::debug!(found = result.is_ok(), "dispatched");
        result
    }

    /// Permissive dispatch through the wrapped registry.
    pub fn try_respond_with<A, R>(&self, name: &str, args: A) -> Option<R>
    where
        Reg: Respond<A, R>,
    {
        let span = tracing::debug_span!(
            "hollerback",
            operation = %Operation::TryRespondWith,
            callback = %name
        );
        let _enter = span.enter();

        let result = self.inner.try_respond_with(name, args);
        tracing::debug!(found = result.is_some(), "dispatched");
        result
    }
}

impl<'a, A, R> Traced<CallbackRegistry<'a, A, R>> {
    /// Build a traced [`CallbackRegistry`], running `setup` on it once.
    ///
    /// Matches the factory shape expected by `hollerback_with`.
    pub fn new_registry<S>(setup: S) -> Self
    where
        S: FnOnce(&mut CallbackRegistry<'a, A, R>),
    {
        Self::new(CallbackRegistry::new(setup))
    }
}

impl<Reg> Deref for Traced<Reg> {
    type Target = Reg;

    fn deref(&self) -> &Reg {
        &self.inner
    }
}

impl<Reg> DerefMut for Traced<Reg> {
    fn deref_mut(&mut self) -> &mut Reg {
        &mut self.inner
    }
}

impl<A, R, Reg> Respond<A, R> for Traced<Reg>
where
    Reg: Respond<A, R>,
{
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        Traced::respond_with(self, name, args)
    }

    fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        Traced::try_respond_with(self, name, args)
    }
}
