//! Generic response line parser.
//!
//! Splits a status line into protocol, status and message tokens. Any input shape is
//! accepted: a blank line produces three empty tokens, and a status line without a
//! message produces an empty message. No anomaly flags are raised here.

use tracing::trace;

use crate::protocol::{ParseError, Transaction};
use crate::utils::{is_blank, is_space, try_copy_bytes};

/// Parses the transaction's raw response line into its three tokens and sets the
/// numeric protocol and status.
///
/// # Errors
///
/// Only fails with [`ParseError::OutOfMemory`] when a token copy cannot be allocated.
pub fn parse_response_line(tx: &mut Transaction) -> Result<(), ParseError> {
    let line = tx.response_line().clone();
    let data = &line[..];
    let len = data.len();
    let mut pos = 0;

    while pos < len && is_space(data[pos]) {
        pos += 1;
    }

    let start = pos;
    while pos < len && !is_space(data[pos]) {
        pos += 1;
    }

    let protocol = try_copy_bytes(&data[start..pos])?;
    trace!(protocol = ?protocol, "parsed response protocol");
    tx.set_response_protocol(protocol);

    while pos < len && is_blank(data[pos]) {
        pos += 1;
    }

    let start = pos;
    while pos < len && !is_space(data[pos]) {
        pos += 1;
    }

    let status = try_copy_bytes(&data[start..pos])?;
    trace!(status = ?status, "parsed response status");
    tx.set_response_status(status);

    while pos < len && is_blank(data[pos]) {
        pos += 1;
    }

    let message = try_copy_bytes(&data[pos..])?;
    trace!(message = ?message, "parsed response message");
    tx.set_response_message(message);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Protocol;
    use http::StatusCode;

    fn parse(line: &'static str) -> Transaction {
        let mut tx = Transaction::with_response_line(line);
        parse_response_line(&mut tx).unwrap();
        tx
    }

    #[test]
    fn simple_line() {
        let tx = parse("HTTP/1.1 200 OK");

        assert_eq!(tx.response_protocol(), b"HTTP/1.1");
        assert_eq!(tx.response_protocol_number(), Protocol::Http11);
        assert_eq!(tx.response_status(), b"200");
        assert_eq!(tx.response_status_number(), Some(StatusCode::OK));
        assert_eq!(tx.response_message(), b"OK");
        assert!(tx.flags().is_empty());
        assert!(tx.logs().is_empty());
    }

    #[test]
    fn irregular_spacing() {
        let tx = parse("HTTP/1.1    404     Not Found");
        let single = parse("HTTP/1.1 404 Not Found");

        assert_eq!(tx.response_protocol(), single.response_protocol());
        assert_eq!(tx.response_status(), single.response_status());
        assert_eq!(tx.response_message(), single.response_message());
        assert_eq!(tx.response_message(), b"Not Found");
        assert_eq!(tx.response_status_number(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn mixed_whitespace_separators() {
        let tx = parse(" \tHTTP/1.0\t\x0b 301 \x0cMoved  Permanently ");

        assert_eq!(tx.response_protocol(), b"HTTP/1.0");
        assert_eq!(tx.response_protocol_number(), Protocol::Http10);
        assert_eq!(tx.response_status(), b"301");
        assert_eq!(tx.response_message(), b"Moved  Permanently ");
    }

    #[test]
    fn empty_line() {
        let tx = parse("");

        assert!(tx.response_protocol().is_empty());
        assert!(tx.response_status().is_empty());
        assert!(tx.response_message().is_empty());
        assert_eq!(tx.response_protocol_number(), Protocol::Unknown);
        assert_eq!(tx.response_status_number(), None);
    }

    #[test]
    fn blank_line() {
        let tx = parse("   \t ");

        assert!(tx.response_protocol().is_empty());
        assert!(tx.response_status().is_empty());
        assert!(tx.response_message().is_empty());
    }

    #[test]
    fn missing_message() {
        let tx = parse("HTTP/1.1 204");

        assert_eq!(tx.response_status(), b"204");
        assert_eq!(tx.response_status_number(), Some(StatusCode::NO_CONTENT));
        assert!(tx.response_message().is_empty());
    }

    #[test]
    fn unrecognized_tokens() {
        let tx = parse("ICY 2xx Whatever");

        assert_eq!(tx.response_protocol(), b"ICY");
        assert_eq!(tx.response_protocol_number(), Protocol::Unknown);
        assert_eq!(tx.response_status(), b"2xx");
        assert_eq!(tx.response_status_number(), None);
        assert_eq!(tx.response_message(), b"Whatever");
    }

    #[test]
    fn reparse_is_deterministic() {
        let mut tx = Transaction::with_response_line("HTTP/1.1 500 Internal Server Error");
        parse_response_line(&mut tx).unwrap();
        let first = (tx.response_protocol().to_vec(), tx.response_status().to_vec(), tx.response_message().to_vec());

        parse_response_line(&mut tx).unwrap();
        let second = (tx.response_protocol().to_vec(), tx.response_status().to_vec(), tx.response_message().to_vec());

        assert_eq!(first, second);
        assert_eq!(tx.response_status_number(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
