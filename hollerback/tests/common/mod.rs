//! Shared fixtures: every dispatch mode must fire a defined callback the same way.
#![allow(dead_code)]

use hollerback::{CallbackRegistry, Invocation, Operation, Respond, testing::CallRecorder};
use std::rc::Rc;

// ============================================================================
// Helpers
// ============================================================================

/// A trailing block as passed through `Invocation`.
pub type Block = Rc<dyn Fn() -> &'static str>;

/// Fire `name` on `registry` using `operation`, expecting it to be defined.
pub fn fire<Reg, A, R>(registry: &Reg, operation: Operation, name: &str, args: A) -> R
where
    Reg: Respond<A, R>,
{
    registry
        .dispatch(operation, name, args)
        .expect("strict dispatch of a defined callback")
        .expect("permissive dispatch of a defined callback")
}

// ============================================================================
// A callback that can be fired
// ============================================================================

pub fn fires_and_returns_value(operation: Operation) {
    let registry = CallbackRegistry::new(|on| {
        on.register("success", |()| "Return value");
    });

    assert_eq!(fire(&registry, operation, "success", ()), "Return value");
}

pub fn fires_with_no_arguments(operation: Operation) {
    let recorder = CallRecorder::new();
    let registry = CallbackRegistry::new(|on| {
        on.register("success", recorder.recording());
    });

    fire(&registry, operation, "success", ());
    assert_eq!(recorder.count(), 1);
}

pub fn fires_with_one_argument(operation: Operation) {
    let recorder = CallRecorder::new();
    let registry = CallbackRegistry::new(|on| {
        on.register("success", recorder.recording());
    });

    fire(&registry, operation, "success", "Single argument".to_string());
    assert_eq!(recorder.calls(), vec!["Single argument".to_string()]);
}

pub fn fires_with_variable_arguments(operation: Operation) {
    let recorder = CallRecorder::new();
    let registry = CallbackRegistry::new(|on| {
        on.register("success", recorder.recording());
    });

    let arguments: Vec<String> = ["Variable", "argument", "list"]
        .into_iter()
        .map(String::from)
        .collect();
    fire(&registry, operation, "success", arguments.clone());

    assert_eq!(recorder.calls(), vec![arguments]);
}

pub fn fires_with_block_argument(operation: Operation) {
    let recorder: CallRecorder<((u8, String, bool), Option<Block>)> = CallRecorder::new();
    let registry = CallbackRegistry::new(|on| {
        let recorder = recorder.clone();
        on.register(
            "success",
            move |invocation: Invocation<(u8, String, bool), Block>| {
                recorder.record(invocation.into_parts());
            },
        );
    });

    let block: Block = Rc::new(|| "Block argument");
    let arguments = (1, "Positional".to_string(), true);
    fire(
        &registry,
        operation,
        "success",
        Invocation::with_block(arguments.clone(), Rc::clone(&block)),
    );

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    let (received, passed) = &calls[0];
    assert_eq!(received, &arguments);
    let passed = passed.as_ref().expect("block should be passed through");
    assert!(Rc::ptr_eq(passed, &block));
    assert_eq!(passed(), "Block argument");
}
