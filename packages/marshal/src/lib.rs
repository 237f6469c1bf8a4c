//! nwrap: Host/Native Marshaling
//!
//! This crate sits between a dynamically-typed host runtime (described by
//! `nwrap-host`) and native Rust code handling one of its calls:
//! - `NativeString`: an owned string that copies across the host boundary
//!   eagerly, in both directions
//! - `bind` / `bind_args!`: validate and convert a call's arguments into
//!   typed native variables
//! - `set_return`: convert a native value into the call's return value
//!
//! Host values are always built in a scope passed in by the caller, usually
//! `call.scope()`.
//!
//! # Example
//!
//! ```rust
//! use nwrap::{bind_args, set_return, NativeString};
//! use nwrap_host::memory::{MemCall, MemIsolate, MemValue};
//! use nwrap_host::{CallContext, HostValue};
//!
//! // A native handler: repeat(text, times) -> string
//! fn repeat<C: CallContext>(call: &mut C) -> bool {
//!     let mut text = NativeString::new();
//!     let mut times = 0u32;
//!     if !bind_args!(call, text, times) {
//!         return false;
//!     }
//!
//!     let mut out = NativeString::new();
//!     for _ in 0..times {
//!         out += &text;
//!     }
//!     set_return(call, &out);
//!     true
//! }
//!
//! let isolate = MemIsolate::new();
//! let mut call = MemCall::new(&isolate, vec![MemValue::string("ab"), MemValue::number(3.0)]);
//!
//! assert!(repeat(&mut call));
//! assert_eq!(call.return_value().unwrap().to_utf8(), "ababab");
//! ```

mod bind;
mod error;
mod options;
mod ret;
mod slot;
mod string;

pub use bind::{bind, bind_atomic, bind_with, extract, extract_with, try_bind, FromArgs, SlotSet};
pub use error::BindError;
pub use options::{ArityPolicy, BindOptions, CommitPolicy};
pub use ret::{set_return, set_return_value, IntoReturn};
pub use slot::{
    convert_bool, convert_double, convert_exact_int64, convert_exact_uint64, convert_int32,
    convert_int64, convert_string, convert_uint32, convert_uint64, ExactInt64, ExactUint64, Slot,
    SlotKind, MAX_SAFE_INTEGER,
};
pub use string::NativeString;

// Re-export the host interface for handler authors
pub use nwrap_host::{CallContext, HostValue, Primitive, Scope, TypeTag};

/// Bind a call's leading arguments into local variables.
///
/// `bind_args!(call, a, b, c)` is `bind(&*call, (&mut a, &mut b, &mut c))`;
/// `call` must be a reference (shared or mutable) to a `CallContext`.
/// Evaluates to `true` if every variable was bound.
#[macro_export]
macro_rules! bind_args {
    ($call:expr $(, $slot:expr)* $(,)?) => {
        $crate::bind(&*$call, ($(&mut $slot,)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwrap_host::memory::{MemCall, MemIsolate, MemValue};

    #[test]
    fn bind_args_macro_forms() {
        let isolate = MemIsolate::new();
        let call = MemCall::new(&isolate, vec![MemValue::number(1.0), MemValue::boolean(true)]);

        assert!(bind_args!(&call));

        let mut n = 0u32;
        assert!(bind_args!(&call, n));
        assert_eq!(n, 1);

        let mut flag = false;
        assert!(bind_args!(&call, n, flag,));
        assert!(flag);

        let mut s = String::new();
        assert!(!bind_args!(&call, s));
        assert!(s.is_empty());
    }
}
