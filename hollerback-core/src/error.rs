//! Error types for Hollerback.
//!
//! This module provides a small error hierarchy using `thiserror`:
//!
//! - [`HollerbackError`] - Top-level error type for by-name invocation
//! - [`MissingCallbackError`] - Strict dispatch of an unregistered name
//! - [`UnsupportedOperation`] - An operation name the registry does not offer
//!
//! Errors produced by a callback's own body are never represented here. They
//! travel back inside the callback's return value untouched.

use thiserror::Error;

/// Top-level error type for Hollerback operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HollerbackError {
    /// Strict dispatch found no callback under the requested name.
    #[error(transparent)]
    MissingCallback(#[from] MissingCallbackError),

    /// The requested operation is not one the registry exposes.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),
}

/// Returned by `respond_with` when no callback is registered under `name`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no callback '{name}' is defined")]
pub struct MissingCallbackError {
    name: String,
}

impl MissingCallbackError {
    /// Create an error for the given callback name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The callback name that was requested.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Returned when an operation name other than the dispatch operations is
/// invoked on a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported operation '{operation}'")]
pub struct UnsupportedOperation {
    operation: String,
}

impl UnsupportedOperation {
    /// Create an error for the given operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// The operation name that was rejected.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}
