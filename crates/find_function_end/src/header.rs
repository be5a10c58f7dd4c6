// crates/find_function_end/src/header.rs

//! Pure scans over the signature header: stepping over the parameter
//! list, then finding whichever of `{` or `:` introduces the body.

/// What the brace-or-colon scan found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyDelimiter {
    /// A `{` at this offset, with no colon before it.
    Brace(usize),
    /// A `:` at this offset before any `{`.
    Colon(usize),
    /// Neither within the window.
    NotFound,
}

/// Scans `bytes[start..limit]` for a parenthesis group and returns the
/// offset of the `)` that brings the nesting depth back to zero.
///
/// Depth decrements apply to every `)`, so a stray closer before the
/// first `(` pushes the depth negative and must be balanced out before a
/// match is reported. Returns `None` when no balanced group closes within
/// the window.
pub(crate) fn matching_paren_end(bytes: &[u8], start: usize, limit: usize) -> Option<usize> {
    let mut depth: isize = 0;
    let mut found_open = false;
    for (i, &b) in bytes.iter().enumerate().take(limit).skip(start) {
        if b == b'(' {
            found_open = true;
            depth += 1;
        } else if b == b')' {
            depth -= 1;
            if found_open && depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Scans `bytes[search_start..limit]` for the byte that opens the body.
///
/// The first `{` ends the scan. A `:` seen before any `{` is recorded
/// once; after that the scan gives up at the next newline, so a colon can
/// only be trumped by a brace on its own header line. Newlines before the
/// first colon do not stop the scan.
pub(crate) fn find_body_delimiter(bytes: &[u8], search_start: usize, limit: usize) -> BodyDelimiter {
    let mut colon: Option<usize> = None;
    for (i, &b) in bytes.iter().enumerate().take(limit).skip(search_start) {
        if b == b'{' {
            return match colon {
                Some(c) => BodyDelimiter::Colon(c),
                None => BodyDelimiter::Brace(i),
            };
        }
        if b == b':' && colon.is_none() {
            colon = Some(i);
        }
        if colon.is_some() && b == b'\n' {
            break;
        }
    }
    match colon {
        Some(c) => BodyDelimiter::Colon(c),
        None => BodyDelimiter::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_paren_simple_group() {
        let text = b"fn add(a, b) {";
        assert_eq!(matching_paren_end(text, 0, text.len()), Some(11));
    }

    #[test]
    fn test_matching_paren_nested_group() {
        let text = b"f(g(x), h(y)) {";
        assert_eq!(matching_paren_end(text, 0, text.len()), Some(12));
    }

    #[test]
    fn test_matching_paren_none_when_unclosed() {
        let text = b"f(a, b {";
        assert_eq!(matching_paren_end(text, 0, text.len()), None);
    }

    #[test]
    fn test_matching_paren_stray_closer_goes_negative() {
        // The leading `)` puts the depth at -1, so no later closer ever
        // brings it back to zero.
        let text = b") (x) (y)";
        assert_eq!(matching_paren_end(text, 0, text.len()), None);
    }

    #[test]
    fn test_matching_paren_respects_window() {
        let text = b"f(a, b)";
        assert_eq!(matching_paren_end(text, 0, 5), None);
    }

    #[test]
    fn test_body_delimiter_brace() {
        let text = b") {";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::Brace(2));
    }

    #[test]
    fn test_body_delimiter_colon_stops_at_newline() {
        let text = b"):\n{";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::Colon(1));
    }

    #[test]
    fn test_body_delimiter_colon_beats_brace_on_same_line() {
        let text = b"): {";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::Colon(1));
    }

    #[test]
    fn test_body_delimiter_scans_across_newlines_until_colon() {
        // No colon seen yet, so the newline does not stop the scan; the
        // brace on the following line is found.
        let text = b")\n{";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::Brace(2));
    }

    #[test]
    fn test_body_delimiter_not_found() {
        let text = b");";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::NotFound);
    }

    #[test]
    fn test_body_delimiter_colon_at_window_edge_still_reported() {
        let text = b"):";
        assert_eq!(find_body_delimiter(text, 0, text.len()), BodyDelimiter::Colon(1));
    }
}
