//! End-to-end tests for the full lex → parse → build → determinize → match pipeline, plus a
//! property-based cross-check against the `regex` crate used purely as a test-time oracle.

use crate::regex::is_match;
use ::regex::Regex as LibRegex;
use proptest::prelude::*;

#[test]
fn concrete_end_to_end_scenarios() {
    let cases = [
        ("a*b|c", "aaab", true),
        ("a*b|c", "c", true),
        ("a*b|c", "aaa", false),
        ("(a|b)*", "abba", true),
        ("a(b|c)", "ab", true),
        ("a(b|c)", "ad", false),
        ("`*", "*", true),
        ("a*", "", true),
    ];
    for (pattern, text, expected) in cases {
        assert_eq!(
            is_match(pattern, text).unwrap(),
            expected,
            "{pattern:?} against {text:?}"
        );
    }
}

#[test]
fn matching_never_panics_on_out_of_alphabet_input() {
    assert!(!is_match("abc", "xyz").unwrap());
    assert!(!is_match("a", "aa").unwrap());
}

#[test]
fn idempotent_compilation() {
    let inputs = ["", "a", "ab", "ba", "aabb"];
    let first = crate::Regex::new("(a|b)*abb").unwrap();
    let second = crate::Regex::new("(a|b)*abb").unwrap();
    for t in inputs {
        assert_eq!(first.is_match(t), second.is_match(t));
    }
}

proptest! {
    /// Cross-checks `thompson`'s DFA-based matcher against the `regex` crate (as an oracle, never
    /// as a runtime dependency) over a random assortment of patterns built only from this crate's
    /// supported surface: literals, concatenation, alternation and Kleene star.
    #[test]
    fn matches_agree_with_regex_crate(
        pattern in random_pattern(),
        texts in prop::collection::vec("[a-c]{0,6}", 20)
    ) {
        let compiled = crate::Regex::new(&pattern).unwrap();
        let oracle = LibRegex::new(&format!("^(?:{pattern})$")).unwrap();

        for text in texts {
            prop_assert_eq!(compiled.is_match(&text), oracle.is_match(&text));
        }
    }
}

/// Generates patterns using only this crate's supported surface (literals from `a`-`c`,
/// concatenation, alternation and Kleene star) so the `regex` crate can be used as a faithful
/// oracle without tripping over syntax `thompson` intentionally doesn't support.
fn random_pattern() -> impl Strategy<Value = String> {
    "[a-c]".prop_recursive(8, 64, 8, |inner| {
        prop_oneof![
            5 => prop::collection::vec(inner.clone(), 1..5).prop_map(|v| v.join("")),
            5 => prop::collection::vec(inner.clone(), 2..4).prop_map(|v| format!("({})", v.join("|"))),
            2 => inner.clone().prop_map(|r| format!("({r})*")),
        ]
    })
}
