//! # thompson
//!
//! `thompson` is a small regular-expression engine built along the classical textbook pipeline:
//! a pattern string is [lexed](lexer), [parsed](parser) into an abstract syntax tree, compiled to
//! an ε-NFA by [Thompson's construction](nfa), reduced to a DFA by ε-elimination and subset
//! construction, and matched against input with a linear scan.
//!
//! ## Usage
//!
//! ```rust
//! use thompson::Regex;
//!
//! let re = Regex::new("a*b|c").unwrap();
//! assert!(re.is_match("aaab"));
//! assert!(re.is_match("c"));
//! assert!(!re.is_match("aaa"));
//!
//! // or, for a single one-off match:
//! assert!(thompson::is_match("(a|b)*", "abba").unwrap());
//! ```
//!
//! ## Pattern syntax
//!
//! Literal characters match themselves, `(`/`)` group, `|` alternates, `*` is the Kleene star,
//! and the backtick `` ` `` escapes the character after it so that `` ` ``, `*`, `|`, `(` and `)`
//! can be matched literally. There is no support for character classes, anchors, counted
//! repetition, backreferences, capture groups, Unicode properties, or partial/substring matching
//! — `is_match` always decides whole-string membership. See [regex] for the full grammar.
//!
//! ## Pipeline
//!
//! * [lexer] turns a pattern into a token stream, resolving escapes.
//! * [parser] is a recursive-descent parser over that token stream, producing an [parser::Ast].
//! * [nfa] builds an ε-NFA from the AST by Thompson's construction, then eliminates ε-moves and
//!   performs subset construction to reach a [dfa::Dfa].
//! * [dfa] holds the determinized automaton and the matcher that walks it.
//! * [regex] ties the pipeline together behind [Regex] and the top-level [is_match] function.

pub mod dfa;
pub mod lexer;
pub mod nfa;
pub mod parser;
pub mod regex;

pub use regex::{is_match, CompileError, Regex};

#[cfg(test)]
mod tests;
