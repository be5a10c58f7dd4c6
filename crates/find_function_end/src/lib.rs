// crates/find_function_end/src/lib.rs

//! `find_function_end` — given the offset where a suspected function
//! signature line starts, computes the offset just past the end of the
//! construct, or `None` when no end can be determined.
//!
//! The header of the construct decides the syntax family: a `{` after the
//! parameter list means a brace-delimited body (counted over sanitized
//! text), a `:` first means an indentation-delimited body (Python-style).
//! Each step is its own pure function: the matching-paren scan and the
//! brace-or-colon scan live in `header`, the two body walks in `brace`
//! and `indent`.

mod brace;
mod header;
mod indent;

use header::BodyDelimiter;
use line_index::LineAccessor;

/// How far past the signature start the header scans are allowed to look.
/// Signatures whose parameter list and body opener sit beyond this window
/// are rejected rather than scanned without bound; known limitation for
/// extremely long parameter lists.
pub const HEADER_WINDOW: usize = 2000;

/// Finds the end of the function-like construct whose signature line
/// begins at byte offset `signature_start`.
///
/// Returns the offset just past the closing `}` for brace-delimited
/// bodies, the end of the last body line for indentation-delimited
/// bodies, or `None` when the header never produces a body opener or the
/// braces never rebalance.
pub fn find_end(
    text: &str,
    signature_start: usize,
    accessor: &dyn LineAccessor,
) -> Option<usize> {
    let bytes = text.as_bytes();
    let limit = (signature_start + HEADER_WINDOW).min(bytes.len());

    // Step past the parameter list first so that `:` or `{` inside it
    // (default arguments, type annotations) cannot fool the family check.
    let search_start =
        header::matching_paren_end(bytes, signature_start, limit).unwrap_or(signature_start);

    match header::find_body_delimiter(bytes, search_start, limit) {
        BodyDelimiter::Colon(_) => Some(indent::find_indent_end(text, signature_start, accessor)),
        BodyDelimiter::Brace(open_brace) => brace::find_brace_end(text, open_brace),
        BodyDelimiter::NotFound => None,
    }
}
