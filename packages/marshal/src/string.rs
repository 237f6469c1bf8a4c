//! The native string adapter.
//!
//! `NativeString` owns a plain Rust `String` and knows how to cross the host
//! boundary in both directions. Crossing is always a copy, made at the moment
//! of conversion:
//!
//! - host to native (`from_host`, `assign_host`, `push_host`) extracts UTF-8
//!   into a buffer this value owns
//! - native to host (`to_host`) builds a brand-new host string in the scope
//!   it is given; nothing is cached
//!
//! Whether a handle really is a string is the caller's concern. The binder
//! checks tags before it constructs a `NativeString`; direct callers should
//! do the same.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::ffi::{CString, NulError};
use std::fmt;
use std::io::{self, BufRead};
use std::ops::{Add, AddAssign, Deref, DerefMut, Index};
use std::str::FromStr;

use nwrap_host::{HostValue, Scope};
use serde::{Deserialize, Serialize};

/// An owned string with eager host-boundary conversion.
///
/// Equality, ordering and hashing are byte-wise over the contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeString {
    buf: String,
}

impl NativeString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty string with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Copy the text of a host string handle.
    pub fn from_host<V: HostValue>(value: &V) -> Self {
        Self {
            buf: value.to_utf8(),
        }
    }

    /// Replace the contents with a copy of a host string's text.
    pub fn assign_host<V: HostValue>(&mut self, value: &V) {
        self.buf = value.to_utf8();
    }

    /// Build a new host string holding a copy of this string.
    pub fn to_host<S: Scope>(&self, scope: &S) -> S::Value {
        scope.new_string(&self.buf)
    }

    /// Exchange contents with a host string handle.
    ///
    /// The handle's text is extracted first, then the handle is replaced by a
    /// fresh host string built from this value's previous contents.
    pub fn swap_host<S: Scope>(&mut self, handle: &mut S::Value, scope: &S) {
        let extracted = handle.to_utf8();
        *handle = scope.new_string(&self.buf);
        self.buf = extracted;
    }

    /// Compare contents with a host string's text.
    pub fn eq_host<V: HostValue>(&self, value: &V) -> bool {
        self.buf == value.to_utf8()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Mutable access to the underlying buffer.
    pub fn as_mut_string(&mut self) -> &mut String {
        &mut self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Copy into a nul-terminated C string.
    ///
    /// Fails if the contents hold an interior nul byte.
    pub fn to_c_string(&self) -> Result<CString, NulError> {
        CString::new(self.buf.as_bytes())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append a copy of a host string's text.
    pub fn push_host<V: HostValue>(&mut self, value: &V) {
        self.buf.push_str(&value.to_utf8());
    }

    /// Byte at `index`, or `None` if out of range.
    ///
    /// Indexing with `s[index]` is the panicking variant.
    pub fn at(&self, index: usize) -> Option<u8> {
        self.buf.as_bytes().get(index).copied()
    }

    pub fn swap(&mut self, other: &mut NativeString) {
        std::mem::swap(&mut self.buf, &mut other.buf);
    }

    /// Exchange contents with a plain `String`.
    pub fn swap_string(&mut self, other: &mut String) {
        std::mem::swap(&mut self.buf, other);
    }

    /// Read one whitespace-delimited token.
    ///
    /// Leading whitespace is skipped; the whitespace that ends the token is
    /// left in the reader. Returns `Ok(None)` when the input holds no more
    /// tokens.
    pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<Self>> {
        let mut token = Vec::new();
        loop {
            let (consumed, done) = {
                let available = match reader.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    break;
                }
                let mut consumed = 0;
                let mut done = false;
                for &byte in available {
                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            consumed += 1;
                            continue;
                        }
                        done = true;
                        break;
                    }
                    token.push(byte);
                    consumed += 1;
                }
                (consumed, done)
            };
            reader.consume(consumed);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        String::from_utf8(token)
            .map(|buf| Some(Self { buf }))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Deref for NativeString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.buf
    }
}

impl DerefMut for NativeString {
    fn deref_mut(&mut self) -> &mut str {
        &mut self.buf
    }
}

impl AsRef<str> for NativeString {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl AsRef<[u8]> for NativeString {
    fn as_ref(&self) -> &[u8] {
        self.buf.as_bytes()
    }
}

impl Borrow<str> for NativeString {
    fn borrow(&self) -> &str {
        &self.buf
    }
}

impl Index<usize> for NativeString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.buf.as_bytes()[index]
    }
}

impl<'a> IntoIterator for &'a NativeString {
    type Item = char;
    type IntoIter = std::str::Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.chars()
    }
}

impl fmt::Display for NativeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl fmt::Write for NativeString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl FromStr for NativeString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::from(s))
    }
}

// Conversions from native text

impl From<String> for NativeString {
    fn from(buf: String) -> Self {
        Self { buf }
    }
}

impl From<&str> for NativeString {
    fn from(s: &str) -> Self {
        Self { buf: s.to_string() }
    }
}

impl From<char> for NativeString {
    fn from(c: char) -> Self {
        Self { buf: c.to_string() }
    }
}

impl From<NativeString> for String {
    fn from(s: NativeString) -> Self {
        s.buf
    }
}

impl FromIterator<char> for NativeString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for NativeString {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for NativeString {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<'a> Extend<&'a str> for NativeString {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

// Appending

impl AddAssign<&NativeString> for NativeString {
    fn add_assign(&mut self, rhs: &NativeString) {
        self.buf.push_str(&rhs.buf);
    }
}

impl AddAssign<&str> for NativeString {
    fn add_assign(&mut self, rhs: &str) {
        self.buf.push_str(rhs);
    }
}

impl AddAssign<char> for NativeString {
    fn add_assign(&mut self, rhs: char) {
        self.buf.push(rhs);
    }
}

// Concatenation

impl Add<&NativeString> for NativeString {
    type Output = NativeString;

    fn add(mut self, rhs: &NativeString) -> NativeString {
        self.buf.push_str(&rhs.buf);
        self
    }
}

impl Add<NativeString> for NativeString {
    type Output = NativeString;

    fn add(mut self, rhs: NativeString) -> NativeString {
        self.buf.push_str(&rhs.buf);
        self
    }
}

impl Add<&NativeString> for &NativeString {
    type Output = NativeString;

    fn add(self, rhs: &NativeString) -> NativeString {
        let mut buf = String::with_capacity(self.buf.len() + rhs.buf.len());
        buf.push_str(&self.buf);
        buf.push_str(&rhs.buf);
        NativeString { buf }
    }
}

impl Add<&str> for NativeString {
    type Output = NativeString;

    fn add(mut self, rhs: &str) -> NativeString {
        self.buf.push_str(rhs);
        self
    }
}

impl Add<char> for NativeString {
    type Output = NativeString;

    fn add(mut self, rhs: char) -> NativeString {
        self.buf.push(rhs);
        self
    }
}

impl Add<NativeString> for &str {
    type Output = NativeString;

    fn add(self, rhs: NativeString) -> NativeString {
        let mut buf = String::with_capacity(self.len() + rhs.buf.len());
        buf.push_str(self);
        buf.push_str(&rhs.buf);
        NativeString { buf }
    }
}

impl Add<NativeString> for char {
    type Output = NativeString;

    fn add(self, rhs: NativeString) -> NativeString {
        let mut buf = String::with_capacity(self.len_utf8() + rhs.buf.len());
        buf.push(self);
        buf.push_str(&rhs.buf);
        NativeString { buf }
    }
}

// Comparison against native text

impl PartialEq<str> for NativeString {
    fn eq(&self, other: &str) -> bool {
        self.buf == other
    }
}

impl<'a> PartialEq<&'a str> for NativeString {
    fn eq(&self, other: &&'a str) -> bool {
        self.buf == *other
    }
}

impl PartialEq<String> for NativeString {
    fn eq(&self, other: &String) -> bool {
        &self.buf == other
    }
}

impl PartialEq<NativeString> for str {
    fn eq(&self, other: &NativeString) -> bool {
        self == other.buf
    }
}

impl<'a> PartialEq<NativeString> for &'a str {
    fn eq(&self, other: &NativeString) -> bool {
        *self == other.buf
    }
}

impl PartialEq<NativeString> for String {
    fn eq(&self, other: &NativeString) -> bool {
        *self == other.buf
    }
}
