use super::{MemIsolate, MemValue};
use crate::CallContext;

/// A call context for the in-memory host.
#[derive(Debug)]
pub struct MemCall {
    isolate: MemIsolate,
    args: Vec<MemValue>,
    ret: Option<MemValue>,
    returns_set: usize,
}

impl MemCall {
    /// Create a call with the given arguments, running in `isolate`.
    pub fn new(isolate: &MemIsolate, args: Vec<MemValue>) -> Self {
        Self {
            isolate: isolate.clone(),
            args,
            ret: None,
            returns_set: 0,
        }
    }

    /// All arguments, in call order.
    pub fn args(&self) -> &[MemValue] {
        &self.args
    }

    /// The installed return value, if any.
    pub fn return_value(&self) -> Option<&MemValue> {
        self.ret.as_ref()
    }

    /// Take the installed return value out of the call.
    pub fn take_return(&mut self) -> Option<MemValue> {
        self.ret.take()
    }

    /// How many times `set_return` was called.
    pub fn returns_set(&self) -> usize {
        self.returns_set
    }
}

impl CallContext for MemCall {
    type Value = MemValue;
    type Scope = MemIsolate;

    fn len(&self) -> usize {
        self.args.len()
    }

    fn arg(&self, index: usize) -> Option<&MemValue> {
        self.args.get(index)
    }

    fn scope(&self) -> &MemIsolate {
        &self.isolate
    }

    fn set_return(&mut self, value: MemValue) {
        self.returns_set += 1;
        self.ret = Some(value);
    }
}
