// crates/find_function_end/src/brace.rs

//! Brace-delimited body walk: count `{`/`}` over sanitized text so that
//! braces inside strings and comments cannot unbalance the scan.

use sanitize_source::sanitize;

/// Returns the offset just past the `}` that matches the `{` at
/// `open_brace`, or `None` if the braces never rebalance before the end
/// of the text.
pub(crate) fn find_brace_end(text: &str, open_brace: usize) -> Option<usize> {
    let sanitized = sanitize(text, open_brace);
    // Depth 1 for the opening brace already in hand; the walk starts just
    // after it.
    let mut depth: usize = 1;
    for (i, b) in sanitized.bytes().enumerate().skip(1) {
        if b == b'{' {
            depth += 1;
        } else if b == b'}' {
            depth -= 1;
            if depth == 0 {
                return Some(open_brace + i + 1);
            }
        }
    }
    None
}
