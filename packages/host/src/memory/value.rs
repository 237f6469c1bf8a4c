use std::rc::Rc;

use crate::{HostValue, TypeTag};

#[derive(Debug, PartialEq)]
enum Data {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(Box<str>),
    BooleanObject(bool),
    NumberObject(f64),
    StringObject(Box<str>),
    Object,
}

/// A handle to an immutable in-memory host value.
///
/// Cloning a handle is cheap and yields another handle to the same value.
/// `PartialEq` compares contents; use `same_handle` for identity.
#[derive(Clone, Debug, PartialEq)]
pub struct MemValue(Rc<Data>);

impl MemValue {
    fn new(data: Data) -> Self {
        MemValue(Rc::new(data))
    }

    pub fn undefined() -> Self {
        Self::new(Data::Undefined)
    }

    pub fn null() -> Self {
        Self::new(Data::Null)
    }

    pub fn boolean(v: bool) -> Self {
        Self::new(Data::Boolean(v))
    }

    pub fn number(v: f64) -> Self {
        Self::new(Data::Number(v))
    }

    pub fn string(v: &str) -> Self {
        Self::new(Data::String(v.into()))
    }

    /// A boxed boolean, as produced by `new Boolean(v)`.
    pub fn boolean_object(v: bool) -> Self {
        Self::new(Data::BooleanObject(v))
    }

    /// A boxed number, as produced by `new Number(v)`.
    pub fn number_object(v: f64) -> Self {
        Self::new(Data::NumberObject(v))
    }

    /// A boxed string, as produced by `new String(v)`.
    pub fn string_object(v: &str) -> Self {
        Self::new(Data::StringObject(v.into()))
    }

    /// A plain object with no properties.
    pub fn object() -> Self {
        Self::new(Data::Object)
    }

    /// Check if both handles refer to the same value.
    pub fn same_handle(&self, other: &MemValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl HostValue for MemValue {
    fn type_tag(&self) -> TypeTag {
        match *self.0 {
            Data::Undefined => TypeTag::Undefined,
            Data::Null => TypeTag::Null,
            Data::Boolean(_) => TypeTag::Boolean,
            Data::Number(_) => TypeTag::Number,
            Data::String(_) => TypeTag::String,
            Data::BooleanObject(_) => TypeTag::BooleanObject,
            Data::NumberObject(_) => TypeTag::NumberObject,
            Data::StringObject(_) => TypeTag::StringObject,
            Data::Object => TypeTag::Object,
        }
    }

    fn to_utf8(&self) -> String {
        match &*self.0 {
            Data::Undefined => "undefined".to_string(),
            Data::Null => "null".to_string(),
            Data::Boolean(b) | Data::BooleanObject(b) => b.to_string(),
            Data::Number(n) | Data::NumberObject(n) => format_number(*n),
            Data::String(s) | Data::StringObject(s) => s.to_string(),
            Data::Object => "[object Object]".to_string(),
        }
    }

    // ToBoolean: every object is truthy, boxed `false` included.
    fn boolean_value(&self) -> bool {
        match &*self.0 {
            Data::Undefined | Data::Null => false,
            Data::Boolean(b) => *b,
            Data::Number(n) => !(*n == 0.0 || n.is_nan()),
            Data::String(s) => !s.is_empty(),
            Data::BooleanObject(_) | Data::NumberObject(_) | Data::StringObject(_) => true,
            Data::Object => true,
        }
    }

    fn number_value(&self) -> f64 {
        match &*self.0 {
            Data::Undefined | Data::Object => f64::NAN,
            Data::Null => 0.0,
            Data::Boolean(b) | Data::BooleanObject(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Data::Number(n) | Data::NumberObject(n) => *n,
            Data::String(s) | Data::StringObject(s) => parse_number(s),
        }
    }
}

/// Format a double the way the host's ToString does.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        // Rust writes `1e21`, the host writes `1e+21`.
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

// ToNumber applied to a string.
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let upper = prefix.to_ascii_uppercase();
        if let Some(digits) = trimmed
            .strip_prefix(prefix)
            .or_else(|| trimmed.strip_prefix(upper.as_str()))
        {
            return parse_radix(digits, radix);
        }
    }
    // Rust also accepts "inf" and "nan", the host does not.
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

// Unsigned digits only; past u64 the value is accumulated as a double.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || digits.starts_with('+') {
        return f64::NAN;
    }
    if let Ok(v) = u64::from_str_radix(digits, radix) {
        return v as f64;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}
