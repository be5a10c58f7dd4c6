// crates/signature_heuristics/src/arrow.rs

//! Arrow-function assignments: `name = (params) =>` and the paren-free
//! single-identifier form `name = param =>`.

use super::SignatureRule;
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) struct ArrowRule;
pub(super) const ARROW: ArrowRule = ArrowRule;

static PAREN_ARROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=\s*\([^)]*\)\s*=>").unwrap());

static BARE_ARROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"=\s*[A-Za-z_$][A-Za-z0-9_$]*\s*=>").unwrap());

impl SignatureRule for ArrowRule {
    fn name(&self) -> &'static str {
        "arrow"
    }

    fn matches(&self, trimmed: &str) -> bool {
        PAREN_ARROW_RE.is_match(trimmed) || BARE_ARROW_RE.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_arrow_assignment() {
        assert!(ARROW.matches("handler = (event) => {"));
        assert!(ARROW.matches("const sum = (a, b) => a + b;"));
        assert!(ARROW.matches("x=()=>{"));
    }

    #[test]
    fn test_bare_identifier_arrow() {
        assert!(ARROW.matches("double = x => x * 2;"));
        assert!(ARROW.matches("let f = $arg => $arg;"));
    }

    #[test]
    fn test_requires_assignment_context() {
        // A bare arrow with no `=` before it is a callback argument, not a
        // function definition line.
        assert!(!ARROW.matches("items.map(x => x * 2)"));
        assert!(!ARROW.matches("compare a => b"));
    }
}
