//! # Regular expressions
//! The entry point tying the whole pipeline together: lex → parse → Thompson-construct →
//! ε-eliminate → subset-construct, yielding a [Dfa](crate::dfa::Dfa) wrapped in a [Regex] that can
//! be matched against many inputs without recompiling.
//!
//! ## Syntax
//! Literal characters match themselves. `(` and `)` group a subexpression. `|` separates
//! alternatives. `*` is the Kleene star, repeating the nearest preceding group or literal zero or
//! more times. The backtick `` ` `` escapes the character after it, letting `` ` ``, `*`, `|`, `(`
//! and `)` be matched literally. Everything else — including whitespace — is an ordinary literal.
//!
//! ```
//! use thompson::Regex;
//!
//! let re = Regex::new("a*b|c").unwrap();
//! assert!(re.is_match("aaab"));
//! assert!(re.is_match("c"));
//! assert!(!re.is_match("aaa"));
//! ```

use crate::dfa::Dfa;
use crate::lexer::{self, LexError};
use crate::nfa;
use crate::parser::{self, ParseError};
use thiserror::Error;

/// Unifies every way compiling a pattern can fail. Once a [Regex] exists, matching against it is
/// total — there is no corresponding `MatchError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A compiled pattern, ready to be matched against any number of inputs. Compiling is the
/// expensive part (lexing, parsing, Thompson construction and subset construction all happen
/// once, in [Regex::new]); [Regex::is_match] is just a DFA walk.
#[derive(Debug, Clone)]
pub struct Regex {
    dfa: Dfa,
}

impl Regex {
    /// Compiles `pattern` into a [Regex]. Runs the full pipeline: [lexer::lex], [parser::parse],
    /// [nfa::build], [crate::nfa::Nfa::remove_epsilon_moves] and [crate::nfa::Nfa::to_dfa].
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        let tokens = lexer::lex(pattern)?;
        let ast = parser::parse(&tokens)?;
        let dfa = nfa::build(&ast).remove_epsilon_moves().to_dfa();
        Ok(Regex { dfa })
    }

    /// Whole-string membership test against the compiled pattern. See [crate::dfa::Dfa::is_match].
    pub fn is_match(&self, text: &str) -> bool {
        self.dfa.is_match(text)
    }

    /// The compiled DFA backing this regex, for callers that want lower-level access (e.g. a
    /// step-by-step [evaluator](crate::dfa::Dfa::evaluator)).
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

/// Compiles `pattern` and checks whether it matches `text`, in one call. Equivalent to
/// `Regex::new(pattern)?.is_match(text)`, for callers that only need a single match and don't
/// want to hold on to the compiled form.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, CompileError> {
    Ok(Regex::new(pattern)?.is_match(text))
}
