//! Name-keyed callback registry.
//!
//! A [`CallbackRegistry`] is created fresh for each callback-enabled call,
//! populated once by the caller's setup routine, then dispatched to by the
//! operation body. Registration stays available afterwards; nothing seals it.

use hollerback_core::{BoxCallback, Callback, MissingCallbackError, Respond};
use std::{collections::HashMap, fmt};

/// A registry mapping callback names to callbacks.
///
/// Each name holds at most one callback. Registering a name again replaces
/// the previous callback without complaint.
///
/// Names are plain keys. Registering `"respond_with"` stores a callback under
/// that name and has no effect on the dispatch methods themselves.
///
/// # Example
///
/// ```rust
/// use hollerback_std::CallbackRegistry;
///
/// let registry = CallbackRegistry::new(|on| {
///     on.register("success", |value: u32| value + 1)
///         .register("failure", |_| 0);
/// });
///
/// assert_eq!(registry.respond_with("success", 41), Ok(42));
/// assert_eq!(registry.try_respond_with("missing", 1), None);
/// ```
pub struct CallbackRegistry<'a, A = (), R = ()> {
    callbacks: HashMap<String, BoxCallback<'a, A, R>>,
}

impl<'a, A, R> CallbackRegistry<'a, A, R> {
    /// Create a registry and run `setup` on it once before returning.
    pub fn new<S>(setup: S) -> Self
    where
        S: FnOnce(&mut Self),
    {
        let mut registry = Self::empty();
        setup(&mut registry);
        registry
    }

    /// Create a registry with no callbacks.
    pub fn empty() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }

    /// Register `callback` under `name`, replacing any existing callback.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn(A) -> R + 'a,
    {
        self.register_callback(name, callback)
    }

    /// Register a [`Callback`] implementation under `name`, replacing any
    /// existing callback.
    pub fn register_callback<C>(&mut self, name: impl Into<String>, callback: C) -> &mut Self
    where
        C: Callback<A, R> + 'a,
    {
        let name = name.into();
        #[cfg(feature = "tracing")]
        {
            let replaced = self.callbacks.contains_key(&name);
            tracing::trace!(callback = %name, replaced, "registering callback");
        }
        self.callbacks.insert(name, Box::new(callback));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn on<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(A) -> R + 'a,
    {
        self.register(name, callback);
        self
    }

    /// Invoke the callback registered under `name` with `args`.
    ///
    /// Returns the callback's value untouched, or [`MissingCallbackError`]
    /// without running anything when `name` is unregistered.
    pub fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        match self.callbacks.get(name) {
            Some(callback) => Ok(callback.call(args)),
            None => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(callback = %name, "no callback defined");
                }
                Err(MissingCallbackError::new(name))
            }
        }
    }

    /// Invoke the callback registered under `name` with `args`, if any.
    pub fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        self.callbacks.get(name).map(|callback| callback.call(args))
    }

    /// Check whether a callback is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    /// Get the number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Iterate over registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }
}

impl<A, R> Default for CallbackRegistry<'_, A, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, R> fmt::Debug for CallbackRegistry<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &names)
            .finish()
    }
}

impl<A, R> Respond<A, R> for CallbackRegistry<'_, A, R> {
    fn respond_with(&self, name: &str, args: A) -> Result<R, MissingCallbackError> {
        CallbackRegistry::respond_with(self, name, args)
    }

    fn try_respond_with(&self, name: &str, args: A) -> Option<R> {
        CallbackRegistry::try_respond_with(self, name, args)
    }
}

// ============================================================================
// Macro
// ============================================================================

/// Build a [`CallbackRegistry`] from a list of `name => callback` pairs.
///
/// Later entries replace earlier ones with the same name.
///
/// # Example
/// ```
/// use hollerback_std::callbacks;
///
/// let registry = callbacks! {
///     success => |body: &str| format!("ok: {body}"),
///     failure => |body: &str| format!("failed: {body}"),
/// };
/// assert_eq!(registry.respond_with("failure", "timeout").unwrap(), "failed: timeout");
/// ```
#[macro_export]
macro_rules! callbacks {
    () => { $crate::registry::CallbackRegistry::empty() };
    ($($name:ident => $callback:expr),+ $(,)?) => {{
        let mut registry = $crate::registry::CallbackRegistry::empty();
        $(
            registry.register(stringify!($name), $callback);
        )+
        registry
    }};
}
