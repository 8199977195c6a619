use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

use crate::protocol::FieldFlags;

/// Failure signal shared by every operation of the response decoder.
///
/// Content anomalies that still produce a header (empty name, LWS before the colon,
/// non-token names, repeated names) are never reported through this type; they end
/// up as flags on the header and the transaction.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The field has no colon; `flags` are the field flags it was given.
    #[error("header field is unparseable: colon missing")]
    Unparseable { flags: FieldFlags },

    #[error("out of memory: {source}")]
    OutOfMemory {
        #[from]
        source: TryReserveError,
    },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("invalid header line range {start}..{end}, transaction has {len} lines")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    /// Returns true when the field could not be split into name and value.
    ///
    /// Callers usually skip such a field and keep going with the rest of the head.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable { .. })
    }

    /// Returns true when an allocation failed; the transaction should be dropped.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity_overflow() -> TryReserveError {
        Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err()
    }

    #[test]
    fn allocation_failure_is_out_of_memory() {
        let err = ParseError::from(capacity_overflow());

        assert!(err.is_out_of_memory());
        assert!(!err.is_unparseable());
        assert!(err.to_string().starts_with("out of memory"));
    }

    #[test]
    fn unparseable_is_not_out_of_memory() {
        let err = ParseError::Unparseable { flags: FieldFlags::UNPARSEABLE };

        assert!(err.is_unparseable());
        assert!(!err.is_out_of_memory());
    }
}
