//! # Host integration
//!
//! A host is any type offering callback-enabled operations. It gains the
//! capability by composition: implement [`Hollerback`] (or derive it with the
//! `macros` feature of `hollerback`) and call `hollerback_for` from the
//! operation.
//!
//! ```rust
//! use hollerback_std::{CallbackRegistry, Hollerback};
//!
//! struct Client;
//!
//! impl Hollerback for Client {}
//!
//! impl Client {
//!     fn fetch<'a, S>(&self, callbacks: S) -> Option<usize>
//!     where
//!         S: FnOnce(&mut CallbackRegistry<'a, &'static str, usize>),
//!     {
//!         self.hollerback_for(callbacks, |on| on.try_respond_with("success", "body"))
//!     }
//! }
//!
//! let len = Client.fetch(|on| {
//!     on.register("success", |body: &str| body.len());
//! });
//! assert_eq!(len, Some(4));
//! ```

use crate::registry::CallbackRegistry;

/// Build a [`CallbackRegistry`] populated by `setup`, then run `body` with it.
///
/// Returns whatever `body` returns. Nothing is caught: a panic or error value
/// from either closure reaches the caller unchanged.
pub fn hollerback_for<'a, A, R, S, B, T>(setup: S, body: B) -> T
where
    S: FnOnce(&mut CallbackRegistry<'a, A, R>),
    B: FnOnce(&mut CallbackRegistry<'a, A, R>) -> T,
{
    hollerback_with(CallbackRegistry::new, setup, body)
}

/// Build a registry with `factory`, handing it `setup`, then run `body` with it.
///
/// `factory` may produce any registry type, typically one implementing
/// [`Respond`](hollerback_core::Respond).
pub fn hollerback_with<Reg, F, S, B, T>(factory: F, setup: S, body: B) -> T
where
    F: FnOnce(S) -> Reg,
    B: FnOnce(&mut Reg) -> T,
{
    let mut registry = factory(setup);
    body(&mut registry)
}

/// Instance-level access to callback-enabled operations.
///
/// Both methods delegate to the free functions of the same name. With the
/// `macros` feature, `#[derive(Hollerback)]` also provides type-level
/// associated functions `Host::hollerback_for` and `Host::hollerback_with`.
pub trait Hollerback {
    /// See [`hollerback_for`].
    fn hollerback_for<'a, A, R, S, B, T>(&self, setup: S, body: B) -> T
    where
        S: FnOnce(&mut CallbackRegistry<'a, A, R>),
        B: FnOnce(&mut CallbackRegistry<'a, A, R>) -> T,
    {
        hollerback_for(setup, body)
    }

    /// See [`hollerback_with`].
    fn hollerback_with<Reg, F, S, B, T>(&self, factory: F, setup: S, body: B) -> T
    where
        F: FnOnce(S) -> Reg,
        B: FnOnce(&mut Reg) -> T,
    {
        hollerback_with(factory, setup, body)
    }
}
