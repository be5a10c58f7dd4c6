// crates/find_function_end/src/indent.rs

//! Indentation-delimited body walk (Python-style): the body is every
//! following line indented deeper than the signature line, with blank
//! lines passed over.

use line_index::{LineAccessor, Position};

/// Returns the end offset of the construct whose signature line begins at
/// `signature_start`: the end of the last line before the first non-blank
/// line indented at or above the signature's level, or the text length
/// when every following line stays deeper.
pub(crate) fn find_indent_end(
    text: &str,
    signature_start: usize,
    accessor: &dyn LineAccessor,
) -> usize {
    let signature_line = accessor.offset_to_position(signature_start).line;
    let base_indent = leading_whitespace_width(accessor.line_text(signature_line));

    for line in signature_line + 1..accessor.line_count() {
        let line_text = accessor.line_text(line);
        if line_text.trim().is_empty() {
            continue;
        }
        if leading_whitespace_width(line_text) <= base_indent {
            let prev = line - 1;
            let prev_len = accessor.line_text(prev).len();
            return accessor.position_to_offset(Position::new(prev, prev_len));
        }
    }
    text.len()
}

fn leading_whitespace_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
