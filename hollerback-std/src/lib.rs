//! # hollerback-std
//!
//! Standard implementations for Hollerback.
//!
//! This crate provides:
//! - **Registry**: [`CallbackRegistry`] and the [`callbacks!`] builder macro
//! - **Host integration**: [`hollerback_for`], [`hollerback_with`], [`Hollerback`]
//! - **Instrumentation**: [`Traced`] (feature `tracing`)
//! - **Testing**: [`testing::CallRecorder`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hollerback_core;

// Modules
pub mod host;
pub mod registry;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod traced;

#[cfg(all(test, feature = "tracing"))]
mod capture;

pub use host::{Hollerback, hollerback_for, hollerback_with};
pub use registry::CallbackRegistry;
#[cfg(feature = "tracing")]
pub use traced::Traced;
