//! Utility macros and byte helpers for the HTTP crate.
//!
//! This module provides the byte classifiers used by every parser in the crate,
//! line terminator removal, and fallible copies of byte ranges. Everything here is
//! a pure function of its input and safe to share between threads.

use bytes::Bytes;

use crate::protocol::ParseError;

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
/// It's useful for validation checks where you want to return early with an error
/// if some condition is not satisfied.
///
/// # Arguments
///
/// * `$predicate` - A boolean expression that should evaluate to true
/// * `$error` - The error value to return if the predicate is false
///
/// # Example
///
/// ```ignore
/// ensure!(headers.len() < MAX_HEADERS, ParseError::too_many_headers(MAX_HEADERS));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Returns true for the whitespace set used to delimit status line tokens:
/// space, horizontal tab, line feed, vertical tab, form feed and carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Returns true for the generic "blank" set used between status line tokens.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab counts as blank here, so the
/// set matches [`is_space`]. Both names stay because callers skip leading bytes with
/// one and separators with the other.
#[inline]
pub fn is_blank(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0b
}

/// Returns true for linear white space inside a header line: space or horizontal tab.
#[inline]
pub fn is_lws(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Returns true if `c` may appear in an HTTP token, e.g. a header field name.
///
/// Control characters, bytes outside printable ASCII and the separator set
/// `( ) < > @ , ; : \ " / [ ] ? = { }` plus space and tab are rejected.
#[inline]
pub fn is_token(c: u8) -> bool {
    if !(32..=126).contains(&c) {
        return false;
    }

    !matches!(
        c,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}' | b' ' | b'\t'
    )
}

/// Strips trailing line terminators from `data`.
///
/// Each pass removes one `\n`, optionally preceded by `\r`. A lone trailing `\r`
/// without a following `\n` is kept.
pub fn chomp(mut data: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n'] = data {
        data = rest;
        if let [rest @ .., b'\r'] = data {
            data = rest;
        }
    }
    data
}

/// Copies `src` into a freshly allocated buffer, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_copy(src: &[u8]) -> Result<Vec<u8>, ParseError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())?;
    buf.extend_from_slice(src);
    Ok(buf)
}

/// Same as [`try_copy`] but hands back an immutable, cheaply clonable [`Bytes`].
pub(crate) fn try_copy_bytes(src: &[u8]) -> Result<Bytes, ParseError> {
    try_copy(src).map(Bytes::from)
}
