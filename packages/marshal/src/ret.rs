//! The return dispatcher.

use nwrap_host::{CallContext, Primitive, Scope};

use crate::NativeString;

/// A native value that can become a call's return value.
///
/// Primitives are built directly by the scope. Strings go through
/// `NativeString::to_host`; plain string buffers are wrapped in a
/// `NativeString` first.
pub trait IntoReturn {
    /// Build the host form of this value in `scope`.
    fn into_host<S: Scope>(self, scope: &S) -> S::Value;
}

impl IntoReturn for Primitive {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(self)
    }
}

impl IntoReturn for () {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(Primitive::Undefined)
    }
}

impl IntoReturn for bool {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(Primitive::Boolean(self))
    }
}

impl IntoReturn for i32 {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(Primitive::Int32(self))
    }
}

impl IntoReturn for u32 {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(Primitive::Uint32(self))
    }
}

impl IntoReturn for f64 {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        scope.new_primitive(Primitive::Double(self))
    }
}

impl IntoReturn for &NativeString {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        self.to_host(scope)
    }
}

impl IntoReturn for NativeString {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        self.to_host(scope)
    }
}

impl IntoReturn for String {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        NativeString::from(self).into_host(scope)
    }
}

impl IntoReturn for &String {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        NativeString::from(self.as_str()).into_host(scope)
    }
}

impl IntoReturn for &str {
    fn into_host<S: Scope>(self, scope: &S) -> S::Value {
        NativeString::from(self).into_host(scope)
    }
}

/// Convert `value` and install it as the call's return value.
///
/// A second call replaces the first; whether the host accepts that is up to
/// the host.
pub fn set_return<C: CallContext, R: IntoReturn>(call: &mut C, value: R) {
    let value = value.into_host(call.scope());
    call.set_return(value);
}

/// Install a value that is already in host form.
pub fn set_return_value<C: CallContext>(call: &mut C, value: C::Value) {
    call.set_return(value);
}
