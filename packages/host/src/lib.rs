//! Host Runtime Interface
//!
//! This crate describes the narrow slice of a dynamically-typed host runtime
//! that native call handlers need:
//! - `HostValue`: a runtime-tagged value handle with type predicates and
//!   typed extraction
//! - `Scope`: the execution context through which new host values are built
//! - `CallContext`: one in-progress native invocation (arguments in, one
//!   return value out)
//!
//! The `memory` module provides a small in-memory host with ECMAScript
//! coercion rules. It backs the tests.
//!
//! # Example
//!
//! ```rust
//! use nwrap_host::memory::{MemCall, MemIsolate, MemValue};
//! use nwrap_host::{CallContext, HostValue, Scope};
//!
//! let isolate = MemIsolate::new();
//! let mut call = MemCall::new(&isolate, vec![MemValue::string("hi"), MemValue::number(2.0)]);
//!
//! assert_eq!(call.len(), 2);
//! assert!(call.arg(0).unwrap().is_string());
//!
//! let greeting = call.scope().new_string("hello");
//! call.set_return(greeting);
//! assert_eq!(call.return_value().unwrap().to_utf8(), "hello");
//! ```

mod call;
pub mod memory;
mod numeric;
mod scope;
mod tag;
mod value;

pub use call::CallContext;
pub use numeric::{is_int32_number, is_uint32_number, to_int32, to_uint32};
pub use scope::{Primitive, Scope};
pub use tag::TypeTag;
pub use value::HostValue;
