use std::cell::Cell;
use std::rc::Rc;

use super::MemValue;
use crate::{Primitive, Scope};

#[derive(Debug, Default)]
struct Counters {
    strings: Cell<usize>,
    primitives: Cell<usize>,
}

/// The in-memory execution scope.
///
/// Clones share their counters, so a call context holding a clone reports
/// into the same totals as the isolate it was created from.
#[derive(Clone, Debug, Default)]
pub struct MemIsolate {
    counters: Rc<Counters>,
}

impl MemIsolate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strings created through this scope.
    pub fn strings_created(&self) -> usize {
        self.counters.strings.get()
    }

    /// Number of primitives created through this scope.
    pub fn primitives_created(&self) -> usize {
        self.counters.primitives.get()
    }
}

impl Scope for MemIsolate {
    type Value = MemValue;

    fn new_string(&self, utf8: &str) -> MemValue {
        let strings = &self.counters.strings;
        strings.set(strings.get() + 1);
        MemValue::string(utf8)
    }

    fn new_primitive(&self, primitive: Primitive) -> MemValue {
        let primitives = &self.counters.primitives;
        primitives.set(primitives.get() + 1);
        match primitive {
            Primitive::Undefined => MemValue::undefined(),
            Primitive::Null => MemValue::null(),
            Primitive::Boolean(b) => MemValue::boolean(b),
            Primitive::Int32(i) => MemValue::number(f64::from(i)),
            Primitive::Uint32(u) => MemValue::number(f64::from(u)),
            Primitive::Double(d) => MemValue::number(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostValue;

    #[test]
    fn new_string_allocates_fresh_handles() {
        let isolate = MemIsolate::new();
        let a = isolate.new_string("same");
        let b = isolate.new_string("same");

        assert_eq!(a, b);
        assert!(!a.same_handle(&b));
        assert_eq!(isolate.strings_created(), 2);
    }

    #[test]
    fn clones_share_counters() {
        let isolate = MemIsolate::new();
        let clone = isolate.clone();
        clone.new_string("x");
        clone.new_primitive(Primitive::Null);

        assert_eq!(isolate.strings_created(), 1);
        assert_eq!(isolate.primitives_created(), 1);
    }

    #[test]
    fn primitives_become_numbers_and_booleans() {
        let isolate = MemIsolate::new();
        let v = isolate.new_primitive(Primitive::Uint32(u32::MAX));
        assert!(v.is_uint32());
        assert_eq!(v.number_value(), 4_294_967_295.0);

        let v = isolate.new_primitive(Primitive::Int32(-3));
        assert!(v.is_int32());

        let v = isolate.new_primitive(Primitive::Boolean(true));
        assert!(v.is_boolean());
        assert!(isolate.new_primitive(Primitive::Undefined).is_undefined());
    }
}
