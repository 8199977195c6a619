//! Per-transaction anomaly log.
//!
//! Every anomaly the decoder reports is kept on the transaction so a downstream rule
//! engine can audit it, and is mirrored to `tracing`. Anomalies are logged once per
//! transaction and per transaction flag, so several kinds of invalid field share a
//! single entry. Errors that raise no flag are tracked in [`ReportedErrors`].

use std::fmt;
use std::panic::Location;

use bitflags::bitflags;

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warning,
}

/// The condition a [`LogEntry`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCode {
    /// A header line has no colon at all.
    FieldMissingColon,
    /// A header line starts with its colon.
    FieldEmptyName,
    /// Linear white space sits between a header name and its colon.
    FieldLwsAfterName,
    /// A header name contains a byte that is not a token character.
    HeaderNameNotToken,
    /// The caller handed in an assembly range that does not exist.
    InternalError,
}

impl LogCode {
    /// Human readable description used when the code is logged.
    pub fn message(self) -> &'static str {
        match self {
            Self::FieldMissingColon => "Response field invalid: colon missing",
            Self::FieldEmptyName => "Response field invalid: empty name",
            Self::FieldLwsAfterName => "Response field invalid: LWS after name",
            Self::HeaderNameNotToken => "Response header name is not a token",
            Self::InternalError => "Process response header: internal error",
        }
    }
}

impl fmt::Display for LogCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One reported anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub code: LogCode,
    pub message: &'static str,
    /// Source location of the parser code that raised the entry.
    pub location: &'static Location<'static>,
}

bitflags! {
    /// Errors already logged on one transaction that have no [`TxFlags`](crate::protocol::TxFlags) of their own.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ReportedErrors: u8 {
        /// [`LogCode::InternalError`] was logged.
        const INTERNAL = 0x01;
    }
}
