// crates/sanitize_source/src/lib.rs

//! Blanks string literals and comments out of source text so that
//! structural scans (brace/paren counting) cannot be fooled by braces or
//! quotes living inside literal content.
//!
//! The output always has exactly the same byte length as the input suffix;
//! every byte is either the original byte or a space. Newlines that end a
//! line comment are kept as newlines so line-oriented logic downstream
//! still sees the same line layout.

/// Returns a copy of `text[start..]` with all string-literal and comment
/// content replaced by spaces.
///
/// Handled runs, in a single forward pass:
///  * `/* ... */` – blanked entirely, delimiters included; an unterminated
///    block comment blanks to the end of the text.
///  * `// ...` – blanked through the end of the line; the terminating
///    newline itself is preserved. Unterminated blanks to the end.
///  * `"..."`, `'...'` and backtick literals – blanked, delimiters
///    included. A backslash escapes the byte after it (both are blanked
///    and the escaped byte is never re-examined as a delimiter).
///    Unterminated literals blank to the end.
///  * Every other byte is copied through unchanged.
///
/// Offsets are byte offsets; the delimiters involved are all ASCII, so
/// multi-byte characters are either copied intact or blanked whole.
pub fn sanitize(text: &str, start: usize) -> String {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut result = vec![b' '; len.saturating_sub(start)];
    let mut i = 0;

    while start + i < len {
        let b = bytes[start + i];
        let next = if start + i + 1 < len {
            Some(bytes[start + i + 1])
        } else {
            None
        };

        // Block comment.
        if b == b'/' && next == Some(b'*') {
            i += 2;
            while start + i + 1 < len {
                if bytes[start + i] == b'*' && bytes[start + i + 1] == b'/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // Line comment. The newline that ends it stays a newline.
        if b == b'/' && next == Some(b'/') {
            i += 2;
            while start + i < len && bytes[start + i] != b'\n' {
                i += 1;
            }
            if start + i < len {
                result[i] = b'\n';
                i += 1;
            }
            continue;
        }

        // String literal (double, single, or backtick quoted).
        if b == b'"' || b == b'\'' || b == b'`' {
            let quote = b;
            i += 1;
            while start + i < len {
                if bytes[start + i] == b'\\' {
                    i += 2;
                    continue;
                }
                if bytes[start + i] == quote {
                    i += 1;
                    break;
                }
                i += 1;
            }
            continue;
        }

        result[i] = b;
        i += 1;
    }

    // Only original bytes and ASCII spaces ever land in the buffer, and
    // multi-byte sequences are copied or blanked whole.
    String::from_utf8(result).expect("blanking preserves UTF-8 validity")
}
