//! Positional arguments with an optional trailing block.

/// Arguments for a callback that may also receive a trailing block.
///
/// The block is carried by value and handed to the callback as-is, so a
/// reference-counted block keeps its identity across dispatch.
///
/// # Example
///
/// ```rust
/// use hollerback_core::Invocation;
///
/// let plain: Invocation<(&str,), ()> = Invocation::new(("arg",));
/// assert!(plain.block().is_none());
///
/// let with_block = Invocation::with_block((), || "Block argument");
/// assert_eq!(with_block.block().map(|b| b()), Some("Block argument"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Invocation<T, B> {
    args: T,
    block: Option<B>,
}

impl<T, B> Invocation<T, B> {
    /// Arguments without a block.
    pub const fn new(args: T) -> Self {
        Self { args, block: None }
    }

    /// Arguments followed by a block.
    pub const fn with_block(args: T, block: B) -> Self {
        Self {
            args,
            block: Some(block),
        }
    }

    /// The positional arguments.
    pub fn args(&self) -> &T {
        &self.args
    }

    /// The trailing block, if one was supplied.
    pub fn block(&self) -> Option<&B> {
        self.block.as_ref()
    }

    /// Split into positional arguments and block.
    pub fn into_parts(self) -> (T, Option<B>) {
        (self.args, self.block)
    }
}

impl<T, B> From<T> for Invocation<T, B> {
    fn from(args: T) -> Self {
        Self::new(args)
    }
}
