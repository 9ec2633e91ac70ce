//! mozContact to vCard converter - integration test support.
//!
//! Re-exports the workspace crates under short paths and provides shared
//! helpers for the tests in `tests/`.

pub use mozvcard_rfc as rfc;

/// Splits a document into physical lines, dropping the empty tail after
/// the final CRLF.
#[must_use]
pub fn physical_lines(document: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = document.split("\r\n").collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}
