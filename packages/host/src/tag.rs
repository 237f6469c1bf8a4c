//! Runtime type tags.

use std::fmt;

/// The dynamic type of a host value.
///
/// Boxed primitives (`new String("x")` and friends) carry their own tags.
/// They are objects as far as the host is concerned, but the binder accepts
/// them wherever the unboxed primitive is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    /// `new Boolean(..)`
    BooleanObject,
    /// `new Number(..)`
    NumberObject,
    /// `new String(..)`
    StringObject,
    /// Any other object.
    Object,
}

impl TypeTag {
    /// Check if values with this tag are objects (boxed or plain).
    pub fn is_object(self) -> bool {
        matches!(
            self,
            TypeTag::BooleanObject | TypeTag::NumberObject | TypeTag::StringObject | TypeTag::Object
        )
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::BooleanObject => "Boolean object",
            TypeTag::NumberObject => "Number object",
            TypeTag::StringObject => "String object",
            TypeTag::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
