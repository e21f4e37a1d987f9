//! # hollerback-core
//!
//! Core traits for Hollerback, a registry of named callbacks that a
//! callback-enabled operation can respond with.
//!
//! This crate has minimal dependencies and is designed to be imported by code
//! that provides its own registry and only needs the dispatch contract.
//!
//! # Roles
//!
//! ## Callback ([`Callback`])
//!
//! The invocable stored under a name. Receives the caller's arguments
//! unchanged and returns its value verbatim. Closures qualify automatically.
//!
//! ## Dispatch ([`Respond`])
//!
//! What an operation body uses to fire callbacks, in strict or permissive
//! mode. Alternative registries implement this trait.
//!
//! ## Arguments ([`Invocation`])
//!
//! Positional arguments plus an optional trailing block, for callbacks that
//! take one.
//!
//! # Error Types
//!
//! - [`HollerbackError`] - Top-level error type
//! - [`MissingCallbackError`] - Strict dispatch of an unregistered name
//! - [`UnsupportedOperation`] - Unknown operation name

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;
mod invocation;
mod operation;
mod respond;

// Re-exports
pub use callback::{BoxCallback, Callback};
pub use error::{HollerbackError, MissingCallbackError, UnsupportedOperation};
pub use invocation::Invocation;
pub use operation::Operation;
pub use respond::Respond;
