//! Folded header assembler.
//!
//! A logical header may span several raw lines through obsolete line folding. The
//! assembler joins those lines, hands the result to [`parse_response_header`], and
//! merges the parsed header into the transaction's [`HeaderTable`](crate::protocol::HeaderTable).
//!
//! Folded lines are joined verbatim: each line loses its terminator and nothing is
//! inserted between segments, so `"X-Foo: a"` followed by `"  b"` yields `"a  b"`.

use std::ops::Range;

use tracing::trace;

use crate::codec::header::parse_response_header;
use crate::protocol::{HeaderId, HeaderLine, LogCode, ParseError, ReportedErrors, Transaction};
use crate::utils::chomp;

/// Assembles the header lines at `lines` into one logical header and inserts it into
/// the transaction, or merges it into an existing header with the same name.
///
/// On success every line in `lines` refers to the returned [`HeaderId`]. On failure
/// nothing is inserted and the lines keep their previous back-references.
///
/// # Errors
///
/// - [`ParseError::InvalidRange`] if `lines` is empty or out of bounds.
/// - [`ParseError::Unparseable`] if the assembled line has no colon.
/// - [`ParseError::OutOfMemory`] if the fold buffer, the field copies or the merged
///   value cannot be allocated.
pub fn process_response_header(tx: &mut Transaction, lines: Range<usize>) -> Result<HeaderId, ParseError> {
    let line_count = tx.response_header_lines().len();
    if lines.is_empty() || lines.end > line_count {
        tx.error_once(ReportedErrors::INTERNAL, LogCode::InternalError);
        return Err(ParseError::invalid_range(lines.start, lines.end, line_count));
    }

    let header = if lines.len() == 1 {
        let line = tx.response_header_lines()[lines.start].line().clone();
        parse_response_header(tx, &line)?
    } else {
        let folded = fold_lines(&tx.response_header_lines()[lines.clone()])?;
        trace!(lines = lines.len(), len = folded.len(), "assembled folded header");
        parse_response_header(tx, &folded)?
    };

    let id = tx.response_headers_mut().insert_or_merge(header)?;
    for line in &mut tx.response_header_lines_mut()[lines] {
        line.set_header(id);
    }

    Ok(id)
}

/// Concatenates `lines` without their terminators into one buffer.
fn fold_lines(lines: &[HeaderLine]) -> Result<Vec<u8>, ParseError> {
    let len: usize = lines.iter().map(|line| chomp(line.line()).len()).sum();

    let mut folded = Vec::new();
    folded.try_reserve_exact(len)?;
    for line in lines {
        folded.extend_from_slice(chomp(line.line()));
    }

    Ok(folded)
}
