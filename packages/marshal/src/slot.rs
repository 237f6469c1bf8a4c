//! Typed output slots and the conversion table.
//!
//! The set of bindable native types is closed. Each type names its
//! `SlotKind`, and each kind has one conversion function that checks the
//! runtime tag first and only then extracts. Binding into a type outside this
//! set does not compile.

use std::fmt;

use nwrap_host::HostValue;

use crate::NativeString;

/// Largest integer a double holds exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The static type of an output slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    String,
    Bool,
    Int32,
    Uint32,
    Double,
    /// Signed 64-bit, converted through a double.
    Int64,
    /// Unsigned 64-bit, converted through a double.
    Uint64,
    /// Signed 64-bit, rejecting values a double cannot hold exactly.
    ExactInt64,
    /// Unsigned 64-bit, rejecting values a double cannot hold exactly.
    ExactUint64,
}

impl SlotKind {
    /// Check the runtime tag of `value` against this kind.
    ///
    /// Strings accept string primitives and String objects, booleans accept
    /// boolean primitives and Boolean objects, every numeric kind accepts
    /// any number variant.
    pub fn accepts<V: HostValue>(self, value: &V) -> bool {
        match self {
            SlotKind::String => value.is_string() || value.is_string_object(),
            SlotKind::Bool => value.is_boolean() || value.is_boolean_object(),
            SlotKind::Int32
            | SlotKind::Uint32
            | SlotKind::Double
            | SlotKind::Int64
            | SlotKind::Uint64
            | SlotKind::ExactInt64
            | SlotKind::ExactUint64 => is_numeric(value),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SlotKind::String => "string",
            SlotKind::Bool => "boolean",
            SlotKind::Int32 => "int32",
            SlotKind::Uint32 => "uint32",
            SlotKind::Double => "double",
            SlotKind::Int64 => "int64",
            SlotKind::Uint64 => "uint64",
            SlotKind::ExactInt64 => "exact int64",
            SlotKind::ExactUint64 => "exact uint64",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_numeric<V: HostValue>(value: &V) -> bool {
    value.is_number() || value.is_number_object() || value.is_int32() || value.is_uint32()
}

/// A signed 64-bit slot that refuses lossy input.
///
/// Unlike `i64`, which goes through a double and silently rounds past 2^53,
/// this slot fails to bind for non-integral numbers and for magnitudes above
/// `MAX_SAFE_INTEGER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactInt64(pub i64);

/// An unsigned 64-bit slot that refuses lossy or negative input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactUint64(pub u64);

mod sealed {
    pub trait Sealed {}
}

/// A native type the binder can write into.
///
/// This trait is sealed; the implementations in this module are the whole
/// conversion table.
pub trait Slot: sealed::Sealed + Sized {
    /// The kind this type binds as.
    const KIND: SlotKind;

    /// Convert `value`, or `None` if its tag does not fit this slot.
    fn from_host<V: HostValue>(value: &V) -> Option<Self>;
}

/// Convert to a native string buffer.
pub fn convert_string<V: HostValue>(value: &V) -> Option<String> {
    SlotKind::String.accepts(value).then(|| value.to_utf8())
}

/// Convert to a boolean (the host's truthiness of the value).
pub fn convert_bool<V: HostValue>(value: &V) -> Option<bool> {
    SlotKind::Bool.accepts(value).then(|| value.boolean_value())
}

pub fn convert_double<V: HostValue>(value: &V) -> Option<f64> {
    SlotKind::Double.accepts(value).then(|| value.number_value())
}

/// Convert with the host's ToInt32.
pub fn convert_int32<V: HostValue>(value: &V) -> Option<i32> {
    SlotKind::Int32.accepts(value).then(|| value.int32_value())
}

/// Convert with the host's ToUint32. `2^32` becomes `0`.
pub fn convert_uint32<V: HostValue>(value: &V) -> Option<u32> {
    SlotKind::Uint32.accepts(value).then(|| value.uint32_value())
}

/// Convert through the double view with a saturating cast.
///
/// Precision is lost above 2^53; NaN becomes 0 and out-of-range values clamp
/// to the `i64` bounds.
pub fn convert_int64<V: HostValue>(value: &V) -> Option<i64> {
    SlotKind::Int64
        .accepts(value)
        .then(|| value.number_value() as i64)
}

/// Convert through the double view with a saturating cast.
///
/// Precision is lost above 2^53; NaN and negative values become 0.
pub fn convert_uint64<V: HostValue>(value: &V) -> Option<u64> {
    SlotKind::Uint64
        .accepts(value)
        .then(|| value.number_value() as u64)
}

pub fn convert_exact_int64<V: HostValue>(value: &V) -> Option<ExactInt64> {
    if !SlotKind::ExactInt64.accepts(value) {
        return None;
    }
    let n = value.number_value();
    (is_integral(n) && n.abs() <= MAX_SAFE_INTEGER).then(|| ExactInt64(n as i64))
}

pub fn convert_exact_uint64<V: HostValue>(value: &V) -> Option<ExactUint64> {
    if !SlotKind::ExactUint64.accepts(value) {
        return None;
    }
    let n = value.number_value();
    (is_integral(n) && (0.0..=MAX_SAFE_INTEGER).contains(&n)).then(|| ExactUint64(n as u64))
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

macro_rules! slot {
    ($ty:ty, $kind:ident, $convert:expr) => {
        impl sealed::Sealed for $ty {}

        impl Slot for $ty {
            const KIND: SlotKind = SlotKind::$kind;

            fn from_host<V: HostValue>(value: &V) -> Option<Self> {
                $convert(value)
            }
        }
    };
}

slot!(NativeString, String, |v| convert_string(v).map(NativeString::from));
slot!(String, String, convert_string);
slot!(bool, Bool, convert_bool);
slot!(f64, Double, convert_double);
slot!(i32, Int32, convert_int32);
slot!(u32, Uint32, convert_uint32);
slot!(i64, Int64, convert_int64);
slot!(u64, Uint64, convert_uint64);
slot!(ExactInt64, ExactInt64, convert_exact_int64);
slot!(ExactUint64, ExactUint64, convert_exact_uint64);
