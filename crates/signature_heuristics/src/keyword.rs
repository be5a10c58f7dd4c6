// crates/signature_heuristics/src/keyword.rs

//! Whole-word match against a fixed set of declaration keywords drawn from
//! the languages the scanner targets (C family, Python, JavaScript/Java
//! modifiers).

use super::SignatureRule;
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) struct KeywordRule;
pub(super) const KEYWORD: KeywordRule = KeywordRule;

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:function|def|void|int|char|float|double|public|private|protected|static|async|const|let|var|class)\b",
    )
    .unwrap()
});

impl SignatureRule for KeywordRule {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn matches(&self, trimmed: &str) -> bool {
        KEYWORD_RE.is_match(trimmed)
    }
}
