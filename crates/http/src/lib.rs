//! A lenient HTTP response head decoder for traffic inspection
//!
//! This crate turns raw response bytes captured off the wire into a status line and a
//! set of header name/value pairs. It deliberately tolerates malformed input the way
//! real HTTP implementations do, and records every deviation as a flag, so that a
//! downstream rule engine sees the same interpretation a target client or server would
//! produce.
//!
//! # Features
//!
//! - Status line splitting that accepts any byte shape
//! - Header field parsing tolerant of missing names, LWS before the colon and
//!   non-token names
//! - Reassembly of obsolete folded header lines
//! - Merging of repeated header names into one comma separated value
//! - Per-field and per-transaction anomaly flags, logged once per transaction
//! - Fallible allocation: resource exhaustion is reported, never aborts
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_htp::codec::ResponseHeadDecoder;
//! use micro_htp::protocol::{FieldFlags, TxFlags};
//! use tokio_util::codec::Decoder;
//!
//! let mut buffer = BytesMut::from(&b"HTTP/1.1 200 OK\r\nX-Foo : a\r\nX-Foo: b\r\n\r\n"[..]);
//! let tx = ResponseHeadDecoder::new().decode(&mut buffer).unwrap().unwrap();
//!
//! let header = tx.response_headers().get("x-foo").unwrap();
//! assert_eq!(header.value(), b"a, b");
//! assert_eq!(header.flags(), FieldFlags::INVALID | FieldFlags::REPEATED);
//! assert_eq!(tx.flags(), TxFlags::FIELD_INVALID);
//! assert_eq!(tx.logs().len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the transaction, header and anomaly data model
//! - [`codec`]: the status line parser, the header parser and assembler, and the
//!   framing decoder
//!
//! # Error Handling
//!
//! Content anomalies never fail a call; they are reported through
//! [`protocol::FieldFlags`], [`protocol::TxFlags`] and the transaction log. Failures
//! use [`protocol::ParseError`]:
//!
//! - `Unparseable`: the field had no colon and was not inserted
//! - `OutOfMemory`: an allocation failed, the transaction should be discarded
//!
//! # Concurrency
//!
//! Parsing is synchronous and a [`protocol::Transaction`] is mutated by one caller at a
//! time. Independent transactions can be decoded on separate threads.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
pub use utils::{chomp, is_blank, is_lws, is_space, is_token};
