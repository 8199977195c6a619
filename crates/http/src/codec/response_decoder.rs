//! HTTP response head decoder.
//!
//! Frames a raw byte stream into response heads and runs the lenient parsers over
//! them. Each decoded item is a [`Transaction`] holding the parsed status line, the raw
//! header lines and the assembled header table.
//!
//! # Framing
//!
//! - Lines end at `\n`; a preceding `\r` belongs to the terminator
//! - Empty lines before the status line are skipped
//! - The head ends at the first empty line after the status line
//! - A header line starting with a space or tab continues the previous header
//!
//! Only the head is consumed from the buffer; anything after it is left in place for
//! the caller.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_htp::codec::ResponseHeadDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut buffer = BytesMut::from(&b"HTTP/1.1 200 OK\r\nServer: micro\r\n\r\n"[..]);
//! let tx = ResponseHeadDecoder::new().decode(&mut buffer).unwrap().unwrap();
//!
//! assert_eq!(tx.response_status(), b"200");
//! assert_eq!(tx.response_headers().get("server").unwrap().value(), b"micro");
//! ```

use std::mem;
use std::ops::Range;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, error, trace};

use crate::codec::header::process_response_header;
use crate::codec::parse_response_line;
use crate::ensure;
use crate::protocol::{HeaderLine, ParseError, Transaction};
use crate::utils::{chomp, is_lws};

/// Maximum number of logical headers allowed in a response head
pub const MAX_HEADER_NUM: usize = 64;

/// Maximum size in bytes allowed for the entire response head
pub const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Decoder for HTTP response heads implementing the [`Decoder`] trait.
///
/// Lines already scanned are remembered between calls, so a head arriving in small
/// chunks is scanned once. The decoder expects the buffer to only grow until a head is
/// returned or an error is raised.
#[derive(Debug, Clone)]
pub struct ResponseHeadDecoder {
    max_header_bytes: usize,
    max_header_num: usize,
    scanner: HeadScanner,
}

impl ResponseHeadDecoder {
    /// Creates a decoder with the default limits.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a decoder with custom head size and header count limits.
    pub fn with_limits(max_header_bytes: usize, max_header_num: usize) -> Self {
        Self { max_header_bytes, max_header_num, scanner: HeadScanner::default() }
    }

    pub fn max_header_bytes(&self) -> usize {
        self.max_header_bytes
    }

    pub fn max_header_num(&self) -> usize {
        self.max_header_num
    }
}

impl Default for ResponseHeadDecoder {
    fn default() -> Self {
        Self::with_limits(MAX_HEADER_BYTES, MAX_HEADER_NUM)
    }
}

impl Decoder for ResponseHeadDecoder {
    type Item = Transaction;
    type Error = ParseError;

    /// Attempts to decode one response head from the provided buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(tx))` if a complete head was parsed
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if the head is too large, has too many headers, or an
    ///   allocation failed
    ///
    /// Header fields without a colon are dropped; the transaction is flagged and the
    /// remaining headers are still decoded. An allocation failure drops the whole head.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(layout) = self.scanner.scan(src) else {
            if src.len() > self.max_header_bytes {
                self.scanner = HeadScanner::default();
                return Err(ParseError::too_large_header(src.len(), self.max_header_bytes));
            }
            return Ok(None);
        };

        ensure!(layout.len <= self.max_header_bytes, ParseError::too_large_header(layout.len, self.max_header_bytes));

        let head = src.split_to(layout.len).freeze();
        trace!(head_size = layout.len, header_lines = layout.header_lines.len(), "framed response head");

        let status_line = &head[layout.status_line.clone()];
        let status_end = layout.status_line.start + chomp(status_line).len();
        let mut tx = Transaction::with_response_line(head.slice(layout.status_line.start..status_end));
        parse_response_line(&mut tx)?;

        for line in layout.header_lines {
            tx.push_header_line(head.slice(line));
        }

        let groups = fold_groups(tx.response_header_lines());
        ensure!(groups.len() <= self.max_header_num, ParseError::too_many_headers(self.max_header_num));

        for group in groups {
            match process_response_header(&mut tx, group.clone()) {
                Ok(_) => {}
                Err(e) if e.is_unparseable() => {
                    debug!(lines = ?group, "skip unparseable response header");
                }
                Err(e) if e.is_out_of_memory() => {
                    error!(lines = ?group, "drop response head: {e}");
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Some(tx))
    }
}

/// Line boundaries of one complete head inside the decode buffer.
#[derive(Debug)]
struct HeadLayout {
    /// Bytes consumed by the head, including leading empty lines and the final empty line.
    len: usize,
    /// Status line with its terminator.
    status_line: Range<usize>,
    /// Header lines with their terminators.
    header_lines: Vec<Range<usize>>,
}

/// Incremental line scanner looking for the end of a head.
#[derive(Debug, Clone, Default)]
struct HeadScanner {
    /// Start of the first line whose terminator has not arrived yet.
    line_start: usize,
    /// Bytes already searched for a line feed.
    searched: usize,
    status_line: Option<Range<usize>>,
    header_lines: Vec<Range<usize>>,
}

impl HeadScanner {
    /// Continues scanning `src` where the previous call stopped.
    ///
    /// Returns the layout of the first complete head and resets the scanner, or `None`
    /// if the final empty line has not arrived yet.
    fn scan(&mut self, src: &[u8]) -> Option<HeadLayout> {
        while let Some(offset) = src[self.searched..].iter().position(|&c| c == b'\n') {
            let line = self.line_start..self.searched + offset + 1;
            self.line_start = line.end;
            self.searched = line.end;
            let empty = chomp(&src[line.clone()]).is_empty();

            if self.status_line.is_none() {
                if !empty {
                    self.status_line = Some(line);
                }
                continue;
            }

            if !empty {
                self.header_lines.push(line);
                continue;
            }

            let Self { status_line, header_lines, .. } = mem::take(self);
            return status_line.map(|status_line| HeadLayout { len: line.end, status_line, header_lines });
        }

        self.searched = src.len();
        None
    }
}

/// Splits header lines into runs forming one logical header each.
///
/// A line starting with LWS joins the run before it. A continuation line with no run
/// before it starts its own.
fn fold_groups(lines: &[HeaderLine]) -> Vec<Range<usize>> {
    let mut groups: Vec<Range<usize>> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let continuation = line.line().first().is_some_and(|&c| is_lws(c));
        match groups.last_mut() {
            Some(group) if continuation => group.end = i + 1,
            _ => groups.push(i..i + 1),
        }
    }

    groups
}
