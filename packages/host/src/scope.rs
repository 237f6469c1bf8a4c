//! Execution scopes: the factory side of the host.

use crate::HostValue;

/// A host primitive that can be materialized without native conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Boolean(bool),
    Int32(i32),
    Uint32(u32),
    Double(f64),
}

impl From<bool> for Primitive {
    fn from(v: bool) -> Self {
        Primitive::Boolean(v)
    }
}

impl From<i32> for Primitive {
    fn from(v: i32) -> Self {
        Primitive::Int32(v)
    }
}

impl From<u32> for Primitive {
    fn from(v: u32) -> Self {
        Primitive::Uint32(v)
    }
}

impl From<f64> for Primitive {
    fn from(v: f64) -> Self {
        Primitive::Double(v)
    }
}

/// The execution context new host values are created in.
///
/// A scope is always passed explicitly. Nothing in this workspace reads a
/// process-wide "current context"; whoever constructs a host value says
/// which scope it belongs to.
pub trait Scope {
    /// Handle type produced by this scope.
    type Value: HostValue;

    /// Build a fresh host string from UTF-8 text.
    ///
    /// Every call allocates a new handle, even for identical text.
    fn new_string(&self, utf8: &str) -> Self::Value;

    /// Build a host primitive.
    fn new_primitive(&self, primitive: Primitive) -> Self::Value;
}
