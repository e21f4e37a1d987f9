//! Testing utilities for Hollerback.
//!
//! This module provides utilities to make observing callbacks easier.
//!
//! # Features
//!
//! - [`CallRecorder`]: Records the arguments of every invocation it sees

use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Call Recorder
// ============================================================================

/// Records the arguments each time a callback fires.
///
/// Clones share the same record, so one clone can be moved into a callback
/// while the test keeps the other for assertions. Registries are used from a
/// single thread, so the record is an `Rc<RefCell<_>>`.
///
/// # Example
///
/// ```rust
/// use hollerback_std::{CallbackRegistry, testing::CallRecorder};
///
/// let recorder = CallRecorder::new();
/// let registry = CallbackRegistry::new(|on| {
///     on.register("success", recorder.recording());
/// });
///
/// registry.respond_with("success", "arg").unwrap();
/// assert_eq!(recorder.calls(), vec!["arg"]);
/// ```
pub struct CallRecorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> CallRecorder<T> {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Record one invocation.
    pub fn record(&self, args: T) {
        self.calls.borrow_mut().push(args);
    }

    /// A callback that records its arguments and returns `()`.
    pub fn recording(&self) -> impl Fn(T) + use<T> {
        let recorder = self.clone();
        move |args| recorder.record(args)
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl<T: Clone> CallRecorder<T> {
    /// Get a clone of the recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CallRecorder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallRecorder")
            .field("calls", &self.calls.borrow())
            .finish()
    }
}
