//! HTTP response header processing.
//!
//! # Components
//!
//! - [`parse_response_header`]: splits one logical header line into name and value
//!   - Tolerates LWS before the colon, empty names and non-token names
//!   - Flags every anomaly on the field and, once per kind, on the transaction
//!
//! - [`process_response_header`]: assembles a run of header lines into one header
//!   - Joins obsolete folded lines verbatim
//!   - Merges repeated names into `existing, new`

mod header_assembler;
mod header_parser;

pub use header_assembler::process_response_header;
pub use header_parser::parse_response_header;
