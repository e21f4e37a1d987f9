//! # hollerback - Named callbacks for callback-enabled operations
//!
//! `hollerback` lets an operation declare points where its caller can plug in
//! named callbacks, then fire them by name. The caller registers callbacks in
//! a setup closure; the operation responds with them.
//!
//! ## Quick Start
//!
//! ```rust
//! use hollerback::prelude::*;
//!
//! struct Downloader;
//!
//! impl Hollerback for Downloader {}
//!
//! impl Downloader {
//!     fn download<'a, S>(&self, url: &str, callbacks: S) -> Option<String>
//!     where
//!         S: FnOnce(&mut CallbackRegistry<'a, String, String>),
//!     {
//!         self.hollerback_for(callbacks, |on| {
//!             if url.starts_with("https://") {
//!                 on.try_respond_with("success", format!("fetched {url}"))
//!             } else {
//!                 on.try_respond_with("failure", format!("refused {url}"))
//!             }
//!         })
//!     }
//! }
//!
//! let outcome = Downloader.download("https://example.com", |on| {
//!     on.register("success", |body| body.to_uppercase())
//!         .register("failure", |reason| reason);
//! });
//! assert_eq!(outcome.as_deref(), Some("FETCHED HTTPS://EXAMPLE.COM"));
//! ```
//!
//! ## Dispatch modes
//!
//! - `respond_with` fails with [`MissingCallbackError`] when nothing is
//!   registered under the name.
//! - `try_respond_with` returns `None` instead.
//!
//! ## Features
//!
//! - `macros`: `#[derive(Hollerback)]`
//! - `tracing`: debug logging inside [`CallbackRegistry`] and the [`Traced`]
//!   registry wrapper

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hollerback_core::{
    // Callbacks
    BoxCallback,
    Callback,
    // Error types
    HollerbackError,
    // Arguments
    Invocation,
    MissingCallbackError,
    // Dispatch
    Operation,
    Respond,
    UnsupportedOperation,
};

pub use hollerback_std::{
    CallbackRegistry,
    // Host integration
    Hollerback,
    callbacks,
    hollerback_for,
    hollerback_with,
};

#[cfg(feature = "tracing")]
pub use hollerback_std::Traced;

/// Testing utilities.
pub mod testing {
    pub use hollerback_std::testing::CallRecorder;
}

/// Prelude module - common imports for Hollerback.
///
/// # Usage
///
/// ```rust,ignore
/// use hollerback::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Registry
        CallbackRegistry,
        // Errors
        HollerbackError,
        // Host integration
        Hollerback,
        Invocation,
        MissingCallbackError,
        // Dispatch
        Respond,
    };
}

#[cfg(feature = "macros")]
pub use hollerback_macros::Hollerback;
