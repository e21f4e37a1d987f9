//! # Callbacks
//!
//! A callback is the invocable bound to a name inside a registry. It receives
//! the caller's arguments exactly as supplied and its return value goes back to
//! the caller verbatim.
//!
//! # Argument shape
//!
//! Arguments are a single generic value `A`:
//!
//! - `()` for a callback that takes nothing
//! - `T` for a single argument
//! - a tuple or `Vec<T>` for several arguments
//! - [`Invocation<T, B>`] when a trailing block rides along
//!
//! Failures are part of the return type (`R = Result<T, E>`). The registry
//! never looks inside `R`.
//!
//! [`Invocation<T, B>`]: crate::Invocation

/// An invocable registered under a name.
///
/// Closures implement this automatically. Implement it directly when the
/// callback needs to be a named type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a callback taking `{A}` and returning `{R}`",
    label = "missing `Callback<{A}, {R}>` implementation",
    note = "Closures of the form `Fn({A}) -> {R}` implement `Callback` automatically."
)]
pub trait Callback<A, R> {
    /// Invoke the callback.
    fn call(&self, args: A) -> R;
}

// Blanket impl for closures
impl<F, A, R> Callback<A, R> for F
where
    F: Fn(A) -> R,
{
    fn call(&self, args: A) -> R {
        (self)(args)
    }
}

/// A type-erased callback, as stored by registries.
pub type BoxCallback<'a, A, R> = Box<dyn Callback<A, R> + 'a>;
