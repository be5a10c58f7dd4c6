// crates/signature_heuristics/src/call.rs

//! Bare call-like signatures: an identifier with a parameter list at the
//! very start of the line, followed by `{` (brace bodies) or `:` (Python
//! defs without a keyword hit, object methods).

use super::SignatureRule;
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) struct CallSignatureRule;
pub(super) const CALL: CallSignatureRule = CallSignatureRule;

static CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*\s*\([^)]*\)\s*[{:]").unwrap());

impl SignatureRule for CallSignatureRule {
    fn name(&self) -> &'static str {
        "call"
    }

    fn matches(&self, trimmed: &str) -> bool {
        CALL_RE.is_match(trimmed)
    }
}
