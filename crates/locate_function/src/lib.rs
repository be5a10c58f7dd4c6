// crates/locate_function/src/lib.rs

//! `locate_function` — the boundary locator. Given source text and a
//! cursor byte offset, finds the tightest function-like construct
//! enclosing the cursor.
//!
//! The scan walks candidate lines backward from the cursor line to the
//! top of the buffer. Every line that looks like a signature (per
//! `signature_heuristics`) gets its extent computed by
//! `find_function_end`; extents that contain the cursor compete on
//! length, smallest wins. The scan never stops at the first hit: a
//! farther-back candidate can still produce a tighter extent, and every
//! candidate must be checked for containment.
//!
//! This is a heuristic, not a parser: lines like `const x = 5;` also
//! match the signature rules, but they either fail to produce an extent
//! or produce one that loses the minimality contest, so in practice they
//! filter themselves out.

use find_function_end::find_end;
use line_index::{LineAccessor, LineIndex, Position, Range};
use signature_heuristics::looks_like_signature;

/// Locates the tightest function-like construct enclosing
/// `cursor_offset`. Returns `None` for empty text or when no candidate
/// extent contains the cursor.
///
/// The returned range always satisfies `start <= cursor <= end` in
/// offset terms. Ties on extent length go to the candidate found first,
/// i.e. the one closest to the cursor in the backward scan.
pub fn locate(text: &str, cursor_offset: usize, accessor: &dyn LineAccessor) -> Option<Range> {
    if text.is_empty() {
        return None;
    }
    let cursor_line = accessor.offset_to_position(cursor_offset).line;

    let mut best: Option<Range> = None;
    let mut best_len = usize::MAX;

    for line in (0..=cursor_line).rev() {
        let trimmed = accessor.line_text(line).trim();
        if !looks_like_signature(trimmed) {
            continue;
        }
        let line_start = accessor.line_start_offset(line);
        if let Some(end) = find_end(text, line_start, accessor) {
            if line_start <= cursor_offset && cursor_offset <= end {
                let length = end - line_start;
                if length < best_len {
                    best = Some(Range::new(
                        Position::new(line, 0),
                        accessor.offset_to_position(end),
                    ));
                    best_len = length;
                }
            }
        }
    }
    best
}

/// [`locate`] over a plain string, building the line table internally.
pub fn locate_in_text(text: &str, cursor_offset: usize) -> Option<Range> {
    let index = LineIndex::new(text);
    locate(text, cursor_offset, &index)
}

/// Returns the source text of the enclosing construct, if any.
pub fn enclosing_source(text: &str, cursor_offset: usize) -> Option<&str> {
    let index = LineIndex::new(text);
    let range = locate(text, cursor_offset, &index)?;
    let start = index.position_to_offset(range.start);
    let end = index.position_to_offset(range.end);
    Some(&text[start..end])
}
