#![cfg(feature = "macros")]

use hollerback::{CallbackRegistry, Hollerback, MissingCallbackError, testing::CallRecorder};

// ============================================================================
// Test: derive(Hollerback)
// ============================================================================

#[derive(Hollerback)]
struct Uploader {
    chunks: u8,
}

impl Uploader {
    fn upload<'a, S>(&self, callbacks: S) -> Result<u8, MissingCallbackError>
    where
        S: FnOnce(&mut CallbackRegistry<'a, u8, u8>),
    {
        Self::hollerback_for(callbacks, |on| on.respond_with("done", self.chunks))
    }
}

#[test]
fn test_type_level_hollerback_for() {
    let uploader = Uploader { chunks: 3 };
    let result = uploader.upload(|on| {
        on.register("done", |chunks| chunks * 10);
    });
    assert_eq!(result, Ok(30));
}

#[test]
fn test_instance_and_type_level_agree() {
    let uploader = Uploader { chunks: 1 };
    let setup = |on: &mut CallbackRegistry<'static, u8, u8>| {
        on.register("done", |chunks| chunks + 1);
    };

    let by_type = Uploader::hollerback_for(setup, |on| on.respond_with("done", 1));
    let by_instance = uploader.hollerback_for(setup, |on| on.respond_with("done", 1));
    assert_eq!(by_type, Ok(2));
    assert_eq!(by_type, by_instance);
}

#[test]
fn test_type_level_hollerback_with() {
    let built = CallRecorder::new();
    let value = Uploader::hollerback_with(
        |setup: u8| {
            built.record(setup);
            CallbackRegistry::<u8, u8>::empty().on("echo", move |x| x + setup)
        },
        5,
        |registry| registry.try_respond_with("echo", 1),
    );
    assert_eq!(value, Some(6));
    assert_eq!(built.calls(), vec![5]);
}

// ============================================================================
// Test: generic hosts
// ============================================================================

#[derive(Hollerback)]
struct Batch<T: Clone> {
    items: Vec<T>,
}

impl<T: Clone> Batch<T> {
    fn each<'a, S>(&self, callbacks: S) -> usize
    where
        S: FnOnce(&mut CallbackRegistry<'a, T, ()>),
    {
        Self::hollerback_for(callbacks, |on| {
            self.items
                .iter()
                .filter_map(|item| on.try_respond_with("item", item.clone()))
                .count()
        })
    }
}

#[test]
fn test_generic_host() {
    let batch = Batch {
        items: vec!["a", "b", "c"],
    };
    let seen = CallRecorder::new();

    let fired = batch.each(|on| {
        on.register("item", seen.recording());
    });
    assert_eq!(fired, 3);
    assert_eq!(seen.calls(), vec!["a", "b", "c"]);

    assert_eq!(batch.each(|_| {}), 0);
}

// ============================================================================
// Test: #[hollerback(crate = ...)]
// ============================================================================

mod renamed {
    pub use hollerback as callbacks_crate;
}

#[derive(Hollerback)]
#[hollerback(crate = "renamed::callbacks_crate")]
struct Renamed;

#[test]
fn test_crate_path_attribute() {
    let value = Renamed::hollerback_for(
        |on| {
            on.register("success", |()| "Return value");
        },
        |on| on.respond_with("success", ()),
    );
    assert_eq!(value, Ok("Return value"));
}
