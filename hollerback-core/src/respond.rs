//! # Dispatch
//!
//! [`Respond`] is the seam between a callback-enabled operation and whatever
//! registry holds its callbacks. The operation body only ever dispatches; it
//! never needs to know how callbacks were collected.
//!
//! Two modes exist:
//!
//! - **Strict** ([`Respond::respond_with`]): a missing callback is a
//!   [`MissingCallbackError`] for the caller to handle.
//! - **Permissive** ([`Respond::try_respond_with`]): a missing callback is
//!   silently skipped and yields `None`.
//!
//! Neither mode mutates the registry, and neither looks at what the callback
//! returns.

use crate::{
    error::{HollerbackError, MissingCallbackError},
    operation::Operation,
};

/// Dispatch to named callbacks taking `A` and returning `R`.
///
/// Implement this for an alternative registry to use it with
/// `hollerback_with`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch callbacks taking `{A}` and returning `{R}`",
    label = "missing `Respond<{A}, {R}>` implementation",
    note = "Registries must implement `respond_with` and `try_respond_with`."
)]
pub trait Respond<A, R> {
    /// Invoke the callback registered under `name`.
    ///
    /// Fails with [`MissingCallbackError`] if there is none, in which case no
    /// callback has run.
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError>;

    /// Invoke the callback registered under `name`, if any.
    fn try_respond_with(&self, name: &str, args: A) -> Option<R>;

    /// Invoke a dispatch [`Operation`].
    ///
    /// Strict dispatch always produces `Some` on success.
    fn dispatch(
        &self,
        operation: Operation,
        name: &str,
        args: A,
    ) -> Result<Option<R>, HollerbackError> {
        match operation {
            Operation::RespondWith => Ok(Some(self.respond_with(name, args)?)),
            Operation::TryRespondWith => Ok(self.try_respond_with(name, args)),
        }
    }

    /// Invoke a dispatch operation by its name.
    ///
    /// Any operation name other than `respond_with` or `try_respond_with`
    /// fails with [`HollerbackError::Unsupported`].
    fn send(&self, operation: &str, name: &str, args: A) -> Result<Option<R>, HollerbackError> {
        let operation: Operation = operation.parse()?;
        self.dispatch(operation, name, args)
    }
}

impl<A, R, T> Respond<A, R> for &T
where
    T: Respond<A, R> + ?Sized,
{
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        (**self).respond_with(name, args)
    }

    fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        (**self).try_respond_with(name, args)
    }
}

impl<A, R, T> Respond<A, R> for &mut T
where
    T: Respond<A, R> + ?Sized,
{
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        (**self).respond_with(name, args)
    }

    fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        (**self).try_respond_with(name, args)
    }
}

impl<A, R, T> Respond<A, R> for Box<T>
where
    T: Respond<A, R> + ?Sized,
{
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        (**self).respond_with(name, args)
    }

    fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        (**self).try_respond_with(name, args)
    }
}
