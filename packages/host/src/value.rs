//! The value handle trait.

use crate::numeric::{is_int32_number, is_uint32_number, to_int32, to_uint32};
use crate::TypeTag;

/// A runtime-tagged handle to a host-managed value.
///
/// Handles are read-only from the native side: callers inspect the tag and
/// extract typed views, they never mutate the referenced value. Extraction
/// follows the host's own coercion rules, so calling `to_utf8` on a number
/// is well defined but rarely what a caller wants; the binder checks tags
/// before it extracts.
pub trait HostValue {
    /// The dynamic type of this value.
    fn type_tag(&self) -> TypeTag;

    /// Copy the value's string form out as UTF-8.
    ///
    /// The returned buffer is independent of host storage.
    fn to_utf8(&self) -> String;

    /// The value's truthiness.
    fn boolean_value(&self) -> bool;

    /// The value as a double.
    fn number_value(&self) -> f64;

    /// The value as an int32 (ToInt32 of the double view).
    fn int32_value(&self) -> i32 {
        to_int32(self.number_value())
    }

    /// The value as a uint32 (ToUint32 of the double view).
    fn uint32_value(&self) -> u32 {
        to_uint32(self.number_value())
    }

    fn is_undefined(&self) -> bool {
        self.type_tag() == TypeTag::Undefined
    }

    fn is_null(&self) -> bool {
        self.type_tag() == TypeTag::Null
    }

    fn is_string(&self) -> bool {
        self.type_tag() == TypeTag::String
    }

    fn is_string_object(&self) -> bool {
        self.type_tag() == TypeTag::StringObject
    }

    fn is_boolean(&self) -> bool {
        self.type_tag() == TypeTag::Boolean
    }

    fn is_boolean_object(&self) -> bool {
        self.type_tag() == TypeTag::BooleanObject
    }

    fn is_number(&self) -> bool {
        self.type_tag() == TypeTag::Number
    }

    fn is_number_object(&self) -> bool {
        self.type_tag() == TypeTag::NumberObject
    }

    /// Check if this is a primitive number holding an exact int32.
    fn is_int32(&self) -> bool {
        self.is_number() && is_int32_number(self.number_value())
    }

    /// Check if this is a primitive number holding an exact uint32.
    fn is_uint32(&self) -> bool {
        self.is_number() && is_uint32_number(self.number_value())
    }
}
