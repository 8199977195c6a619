//! Response side state of one HTTP transaction.
//!
//! A [`Transaction`] is owned by a single caller and mutated in place by the response
//! line parser and the header assembler. It carries the parsed tokens, the header
//! table, the raw header lines, and the anomaly flags and log raised while parsing.

use std::panic::Location;

use bitflags::bitflags;
use bytes::Bytes;
use http::StatusCode;
use tracing::{error, warn};

use crate::protocol::{HeaderLine, HeaderTable, LogCode, LogEntry, LogLevel, Protocol, ReportedErrors};

bitflags! {
    /// Anomalies observed anywhere in a transaction.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TxFlags: u8 {
        /// At least one field had malformed framing.
        const FIELD_INVALID = 0x01;
        /// At least one field had no colon and was dropped.
        const FIELD_UNPARSEABLE = 0x02;
    }
}

#[derive(Debug, Default)]
pub struct Transaction {
    response_line: Bytes,
    response_protocol: Bytes,
    response_protocol_number: Protocol,
    response_status: Bytes,
    response_status_number: Option<StatusCode>,
    response_message: Bytes,
    response_headers: HeaderTable,
    response_header_lines: Vec<HeaderLine>,
    flags: TxFlags,
    reported: ReportedErrors,
    logs: Vec<LogEntry>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transaction whose raw status line is `line`, terminator removed.
    pub fn with_response_line(line: impl Into<Bytes>) -> Self {
        Self { response_line: line.into(), ..Self::default() }
    }

    pub fn set_response_line(&mut self, line: impl Into<Bytes>) {
        self.response_line = line.into();
    }

    /// Appends one raw header line, terminator still attached, and returns its index.
    pub fn push_header_line(&mut self, line: impl Into<Bytes>) -> usize {
        self.response_header_lines.push(HeaderLine::new(line.into()));
        self.response_header_lines.len() - 1
    }

    pub fn response_line(&self) -> &Bytes {
        &self.response_line
    }

    pub fn response_protocol(&self) -> &[u8] {
        &self.response_protocol
    }

    pub fn response_protocol_number(&self) -> Protocol {
        self.response_protocol_number
    }

    pub fn response_status(&self) -> &[u8] {
        &self.response_status
    }

    /// The numeric status, `None` when the status token is not recognized.
    pub fn response_status_number(&self) -> Option<StatusCode> {
        self.response_status_number
    }

    pub fn response_message(&self) -> &[u8] {
        &self.response_message
    }

    pub fn response_headers(&self) -> &HeaderTable {
        &self.response_headers
    }

    pub fn response_header_lines(&self) -> &[HeaderLine] {
        &self.response_header_lines
    }

    pub fn flags(&self) -> TxFlags {
        self.flags
    }

    /// Anomalies reported on this transaction, oldest first.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub(crate) fn set_response_protocol(&mut self, protocol: Bytes) {
        self.response_protocol_number = Protocol::parse(&protocol);
        self.response_protocol = protocol;
    }

    pub(crate) fn set_response_status(&mut self, status: Bytes) {
        self.response_status_number = crate::protocol::parse_status(&status);
        self.response_status = status;
    }

    pub(crate) fn set_response_message(&mut self, message: Bytes) {
        self.response_message = message;
    }

    pub(crate) fn response_headers_mut(&mut self) -> &mut HeaderTable {
        &mut self.response_headers
    }

    pub(crate) fn response_header_lines_mut(&mut self) -> &mut [HeaderLine] {
        &mut self.response_header_lines
    }

    /// Raises `flag` on the transaction. Only the call that first raises it logs `code`.
    #[track_caller]
    pub(crate) fn warn_once(&mut self, flag: TxFlags, code: LogCode) {
        if self.flags.contains(flag) {
            return;
        }

        self.flags |= flag;
        self.log(LogLevel::Warning, code, Location::caller());
    }

    /// Logs `code` unless `kind` was already reported on this transaction.
    #[track_caller]
    pub(crate) fn error_once(&mut self, kind: ReportedErrors, code: LogCode) {
        if self.reported.contains(kind) {
            return;
        }

        self.reported |= kind;
        self.log(LogLevel::Error, code, Location::caller());
    }

    fn log(&mut self, level: LogLevel, code: LogCode, location: &'static Location<'static>) {
        match level {
            LogLevel::Error => error!(?code, %location, "{}", code.message()),
            LogLevel::Warning => warn!(?code, %location, "{}", code.message()),
        }
        self.logs.push(LogEntry { level, code, message: code.message(), location });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_once_dedups_per_flag() {
        let mut tx = Transaction::new();
        assert!(tx.flags().is_empty());

        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::FieldLwsAfterName);
        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::FieldLwsAfterName);
        tx.warn_once(TxFlags::FIELD_INVALID, LogCode::HeaderNameNotToken);

        assert_eq!(tx.flags(), TxFlags::FIELD_INVALID);
        assert_eq!(tx.logs().len(), 1);
        assert_eq!(tx.logs()[0].code, LogCode::FieldLwsAfterName);
        assert_eq!(tx.logs()[0].level, LogLevel::Warning);
        assert_eq!(tx.logs()[0].message, "Response field invalid: LWS after name");
        assert_eq!(tx.logs()[0].location.file(), file!());

        tx.warn_once(TxFlags::FIELD_UNPARSEABLE, LogCode::FieldMissingColon);
        assert_eq!(tx.flags(), TxFlags::FIELD_INVALID | TxFlags::FIELD_UNPARSEABLE);
        assert_eq!(tx.logs().len(), 2);
        assert_eq!(tx.logs()[1].code, LogCode::FieldMissingColon);
    }

    #[test]
    fn error_once_sets_no_flag() {
        let mut tx = Transaction::new();
        tx.error_once(ReportedErrors::INTERNAL, LogCode::InternalError);
        tx.error_once(ReportedErrors::INTERNAL, LogCode::InternalError);

        assert!(tx.flags().is_empty());
        assert_eq!(tx.logs().len(), 1);
        assert_eq!(tx.logs()[0].level, LogLevel::Error);
        assert_eq!(tx.logs()[0].code, LogCode::InternalError);
    }

    #[test]
    fn header_lines_are_indexed() {
        let mut tx = Transaction::with_response_line("HTTP/1.1 200 OK");
        assert_eq!(tx.push_header_line("Server: a\r\n"), 0);
        assert_eq!(tx.push_header_line(Bytes::from_static(b"Date: b\r\n")), 1);

        assert_eq!(&tx.response_line()[..], b"HTTP/1.1 200 OK");
        assert_eq!(tx.response_header_lines().len(), 2);
        assert!(tx.response_header_lines().iter().all(|l| l.header().is_none()));
    }
}
