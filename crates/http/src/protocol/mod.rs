//! Data model of the response decoder.
//!
//! This module holds everything the parsers in [`crate::codec`] read and write:
//!
//! - **Transaction** ([`transaction`]): the per-response state mutated by the parsers
//!   - [`Transaction`]: status line tokens, header table, raw header lines, anomalies
//!   - [`TxFlags`]: anomalies seen anywhere in the transaction
//!
//! - **Headers** ([`header`]): logical headers and their raw lines
//!   - [`Header`]: an owned name/value pair with [`FieldFlags`]
//!   - [`HeaderLine`]: one raw line and the [`HeaderId`] it was folded into
//!   - [`HeaderTable`]: case-insensitive, insertion ordered name lookup
//!
//! - **Anomaly log** ([`log`]): [`LogEntry`] records, reported at most once per
//!   transaction flag and transaction
//!
//! - **Classifiers** ([`classify`]): [`Protocol`] and [`parse_status`]
//!
//! - **Error Handling** ([`error`]): [`ParseError`]

mod classify;
pub use classify::Protocol;
pub use classify::parse_status;

mod header;
pub use header::FieldFlags;
pub use header::Header;
pub use header::HeaderId;
pub use header::HeaderLine;
pub use header::HeaderTable;

mod log;
pub use log::LogCode;
pub use log::LogEntry;
pub use log::LogLevel;
pub use log::ReportedErrors;

mod transaction;
pub use transaction::Transaction;
pub use transaction::TxFlags;

mod error;
pub use error::ParseError;
