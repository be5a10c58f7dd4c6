// crates/signature_heuristics/src/two_token.rs

//! Two-token C-style signatures: `returntype name(params) {` where the
//! return type is not one of the known keywords (those hit the keyword
//! rule first).

use super::SignatureRule;
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) struct TwoTokenRule;
pub(super) const TWO_TOKEN: TwoTokenRule = TwoTokenRule;

static TWO_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+\s+\w+\s*\([^)]*\)\s*\{").unwrap());

impl SignatureRule for TwoTokenRule {
    fn name(&self) -> &'static str {
        "two_token"
    }

    fn matches(&self, trimmed: &str) -> bool {
        TWO_TOKEN_RE.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_params_brace() {
        assert!(TWO_TOKEN.matches("size_t strlen(str s) {"));
        assert!(TWO_TOKEN.matches("MyType method(arg a) {"));
    }

    #[test]
    fn test_requires_brace_on_same_line() {
        assert!(!TWO_TOKEN.matches("size_t strlen(str s)"));
        assert!(!TWO_TOKEN.matches("size_t strlen(str s);"));
    }

    #[test]
    fn test_requires_two_tokens() {
        assert!(!TWO_TOKEN.matches("strlen(str s) {"));
    }
}
