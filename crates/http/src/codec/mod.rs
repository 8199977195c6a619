//! HTTP response head decoding.
//!
//! This module turns raw response bytes into a structured [`Transaction`](crate::protocol::Transaction).
//! Every parser here is lenient: malformed input is annotated with flags rather than
//! rejected, so downstream analysis sees what a real HTTP stack would see.
//!
//! # Architecture
//!
//! - Status line:
//!   - [`parse_response_line`]: splits protocol, status and message
//!
//! - Headers, via the [`header`] module:
//!   - [`parse_response_header`]: splits one logical line into name and value
//!   - [`process_response_header`]: joins folded lines and merges repeated names
//!
//! - Framing:
//!   - [`ResponseHeadDecoder`]: a [`tokio_util::codec::Decoder`] that frames heads
//!     out of a byte stream and drives the parsers above
//!
//! # Example
//!
//! ```
//! use micro_htp::codec::{parse_response_line, process_response_header};
//! use micro_htp::protocol::Transaction;
//!
//! let mut tx = Transaction::with_response_line("HTTP/1.1 200 OK");
//! parse_response_line(&mut tx).unwrap();
//!
//! tx.push_header_line("X-Foo: a\r\n");
//! tx.push_header_line("  b\r\n");
//! process_response_header(&mut tx, 0..2).unwrap();
//!
//! assert_eq!(tx.response_headers().get("X-Foo").unwrap().value(), b"a  b");
//! ```

mod header;
mod response_decoder;
mod response_line;

pub use header::{parse_response_header, process_response_header};
pub use response_decoder::{MAX_HEADER_BYTES, MAX_HEADER_NUM, ResponseHeadDecoder};
pub use response_line::parse_response_line;
