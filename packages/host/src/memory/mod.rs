//! In-memory host runtime.
//!
//! A minimal host that follows ECMAScript coercion rules for the handful of
//! value kinds the marshaling layer cares about. It has no garbage collector:
//! values are reference-counted handles to immutable data, which matches the
//! "read-only handle" view native code has of a real host.
//!
//! - `MemValue`: value handle
//! - `MemIsolate`: execution scope, counts the values it creates
//! - `MemCall`: call context owning its arguments and return slot

mod call;
mod isolate;
mod value;

pub use call::MemCall;
pub use isolate::MemIsolate;
pub use value::{format_number, MemValue};
