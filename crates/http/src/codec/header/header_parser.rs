//! Generic response header field parser.
//!
//! Splits one logical header line into an owned name and value. The parser is lenient
//! the way real HTTP stacks are: a missing colon is the only fatal condition, all other
//! framing problems produce a header flagged [`FieldFlags::INVALID`].
//!
//! # Rules
//!
//! 1. The first `:` separates name and value. Without one the field is unparseable.
//! 2. LWS between the name and the colon is stripped and flagged.
//! 3. LWS around the value is stripped without a flag.
//! 4. A name containing a non-token byte is flagged once per field.
//!
//! Every flag raised on a field is also raised on the transaction. Only the anomaly
//! that first raises a transaction flag is logged, so a transaction carries at most one
//! [`LogCode`] per flag.

use tracing::trace;

use crate::protocol::{FieldFlags, Header, LogCode, ParseError, Transaction, TxFlags};
use crate::utils::{chomp, is_lws, is_token, try_copy, try_copy_bytes};

/// Parses one header line into a [`Header`].
///
/// `data` may still carry its line terminator; it is removed before parsing.
///
/// # Errors
///
/// - [`ParseError::Unparseable`] if `data` contains no colon. The caller must not
///   insert anything for this field.
/// - [`ParseError::OutOfMemory`] if the name or value copy cannot be allocated.
pub fn parse_response_header(tx: &mut Transaction, data: &[u8]) -> Result<Header, ParseError> {
    let data = chomp(data);
    let len = data.len();
    let mut flags = FieldFlags::empty();

    let Some(colon_pos) = data.iter().position(|&c| c == b':') else {
        flags |= FieldFlags::UNPARSEABLE;
        tx.warn_once(TxFlags::FIELD_UNPARSEABLE, LogCode::FieldMissingColon);
        return Err(ParseError::Unparseable { flags });
    };

    if colon_pos == 0 {
        flags |= FieldFlags::INVALID;
        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::FieldEmptyName);
    }

    let mut name_end = colon_pos;
    while name_end > 0 && is_lws(data[name_end - 1]) {
        name_end -= 1;
        flags |= FieldFlags::INVALID;
        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::FieldLwsAfterName);
    }

    let mut value_start = colon_pos + 1;
    while value_start < len && is_lws(data[value_start]) {
        value_start += 1;
    }

    let mut value_end = len;
    while value_end > value_start && is_lws(data[value_end - 1]) {
        value_end -= 1;
    }

    let name = &data[..name_end];
    if !name.iter().all(|&c| is_token(c)) {
        flags |= FieldFlags::INVALID;
        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::HeaderNameNotToken);
    }

    let name = try_copy_bytes(name)?;
    let value = try_copy(&data[value_start..value_end])?;
    trace!(name = ?name, value_len = value.len(), ?flags, "parsed response header");

    Ok(Header::with_flags(name, value, flags))
}
