//! ECMAScript numeric coercions.
//!
//! The host stores every number as a double. Integer views of a number are
//! produced with the ToInt32/ToUint32 abstract operations: truncate toward
//! zero, then reduce modulo 2^32. Non-finite values and zeros map to 0.

const TWO_POW_32: f64 = 4_294_967_296.0;

/// ECMAScript ToUint32.
pub fn to_uint32(number: f64) -> u32 {
    if !number.is_finite() || number == 0.0 {
        return 0;
    }
    // fmod is exact, so the result is an integer in [0, 2^32).
    number.trunc().rem_euclid(TWO_POW_32) as u32
}

/// ECMAScript ToInt32.
pub fn to_int32(number: f64) -> i32 {
    to_uint32(number) as i32
}

/// Check if a double holds an exact int32 (negative zero does not).
pub fn is_int32_number(number: f64) -> bool {
    number.fract() == 0.0
        && number >= i32::MIN as f64
        && number <= i32::MAX as f64
        && !(number == 0.0 && number.is_sign_negative())
}

/// Check if a double holds an exact uint32 (negative zero does not).
pub fn is_uint32_number(number: f64) -> bool {
    number.fract() == 0.0
        && number >= 0.0
        && number <= u32::MAX as f64
        && !(number == 0.0 && number.is_sign_negative())
}
