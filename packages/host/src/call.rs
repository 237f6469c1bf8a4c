//! The per-invocation call context.

use crate::{HostValue, Scope};

/// One in-progress native invocation.
///
/// The host owns the context; native code borrows it for exactly the
/// duration of the call. Arguments are read-only handles, and there is a
/// single return slot.
pub trait CallContext {
    /// Handle type of the arguments and the return value.
    type Value: HostValue;

    /// Scope the call runs in; used to build return values.
    type Scope: Scope<Value = Self::Value>;

    /// Number of arguments supplied by the caller.
    fn len(&self) -> usize;

    /// Check if the caller supplied no arguments.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Argument at `index`, or `None` past the end.
    fn arg(&self, index: usize) -> Option<&Self::Value>;

    /// The execution scope of this call.
    fn scope(&self) -> &Self::Scope;

    /// Install the call's return value, replacing any earlier one.
    fn set_return(&mut self, value: Self::Value);
}
