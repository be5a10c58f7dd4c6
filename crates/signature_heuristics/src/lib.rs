// crates/signature_heuristics/src/lib.rs

//! `signature_heuristics` — the "does this line look like a function
//! signature?" predicate, kept out of the locator so the rule list can
//! grow without touching the orchestrator.
//!
//!  * **One trait** – [`SignatureRule`] – implemented once per rule shape
//!    (keyword, arrow assignment, bare call, two-token C style). Adding a
//!    heuristic for a new language means adding a single file here.
//!  * **Ordered list** – [`rules`] exposes the rules in evaluation order;
//!    [`looks_like_signature`] is a short-circuit OR over them.
//!
//! The rules are intentionally permissive: ordinary statements containing
//! `const`/`let`/`var` also match. The caller's containment-and-minimality
//! filtering is what weeds those out, so high recall beats precision here.

/// A single line-shape heuristic. Input is always a whitespace-trimmed
/// line of source text.
pub trait SignatureRule: Sync + Send {
    /// Stable rule name, used for diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` if the trimmed line matches this rule's shape.
    fn matches(&self, trimmed: &str) -> bool;
}

static RULES: [&dyn SignatureRule; 4] = [
    &keyword::KEYWORD,
    &arrow::ARROW,
    &call::CALL,
    &two_token::TWO_TOKEN,
];

/// The rules in evaluation order.
pub fn rules() -> &'static [&'static dyn SignatureRule] {
    &RULES
}

/// Returns `true` if any rule matches the trimmed line.
pub fn looks_like_signature(trimmed: &str) -> bool {
    rules().iter().any(|rule| rule.matches(trimmed))
}

/// Returns the name of the first rule that matches, if any.
pub fn matching_rule(trimmed: &str) -> Option<&'static str> {
    rules()
        .iter()
        .find(|rule| rule.matches(trimmed))
        .map(|rule| rule.name())
}

// ---------------------------------------------------------------------------
//  Sub-modules (one per rule)
// ---------------------------------------------------------------------------

mod arrow;
mod call;
mod keyword;
mod two_token;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_in_declared_order() {
        let names: Vec<&str> = rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names, ["keyword", "arrow", "call", "two_token"]);
    }

    #[test]
    fn test_accepts_common_signature_shapes() {
        let lines = [
            "function foo() {",
            "def foo():",
            "public int add(int a, int b) {",
            "const handler = (event) => {",
            "foo(a, b) {",
            "unsigned add(int a, int b) {",
            "async function fetchAll() {",
        ];
        for line in lines {
            assert!(
                looks_like_signature(line),
                "Expected line to look like a signature: {}",
                line
            );
        }
    }

    #[test]
    fn test_rejects_plain_statements() {
        let lines = [
            "return x + 1;",
            "x = y * 2;",
            "} else {",
            "// just a comment",
            "",
        ];
        for line in lines {
            assert!(
                !looks_like_signature(line),
                "Expected line NOT to look like a signature: {}",
                line
            );
        }
    }

    #[test]
    fn test_matching_rule_reports_first_hit() {
        assert_eq!(matching_rule("def foo():"), Some("keyword"));
        assert_eq!(matching_rule("handler = (e) => {"), Some("arrow"));
        assert_eq!(matching_rule("foo(a, b) {"), Some("call"));
        assert_eq!(matching_rule("unsigned add(uint8 a) {"), Some("two_token"));
        assert_eq!(matching_rule("return 42;"), None);
    }

    #[test]
    fn test_keyword_statements_still_match_by_design() {
        // Permissive on purpose: declaration keywords hit the keyword rule
        // even when the line is an ordinary statement.
        assert!(looks_like_signature("const x = 5;"));
        assert!(looks_like_signature("let total = a + b;"));
    }
}
