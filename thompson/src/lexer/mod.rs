//! # Lexer
//! Turns a pattern string into a flat sequence of [Token]s, the input to [crate::parser]. Four
//! characters are structural: `(`, `)`, `|` and `*`. Every other character is a literal, matched
//! as itself. The backtick `` ` `` is an escape: it consumes the character following it and
//! turns it into a literal regardless of what it is, including another backtick, a structural
//! character, or whitespace.
//!
//! A dangling backtick (one with nothing after it) is a [LexError::DanglingEscape]. A backtick
//! followed by anything other than one of the five metacharacters (`` ` ``, `*`, `|`, `(`, `)`)
//! is a [LexError::UnescapableCharacter] — the escape exists to let metacharacters through as
//! literals, not as a general-purpose quoting mechanism.

use std::fmt;
use thiserror::Error;

/// The kind of a single token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    LParen,
    RParen,
    Star,
    Pipe,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(c) => write!(f, "{c}"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Pipe => write!(f, "|"),
        }
    }
}

/// A token together with its 1-based position in the source pattern, used by [crate::parser] to
/// produce human-readable error positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("dangling escape character `` ` `` at end of input")]
    DanglingEscape,
    #[error("`{0}` cannot be escaped, only `*`, `|`, `(`, `)` and `` ` `` can")]
    UnescapableCharacter(char),
}

const ESCAPABLE: [char; 5] = ['*', '|', '(', ')', '`'];

/// Lexes `pattern` into a sequence of [Token]s. Positions are 1-based token indices (not byte
/// offsets), since the parser reports errors in terms of "the n'th token", matching
/// [crate::parser::ParseError]'s position fields.
pub fn lex(pattern: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    let mut position = 0;

    while let Some(c) = chars.next() {
        position += 1;
        let kind = match c {
            '`' => {
                let escaped = chars.next().ok_or(LexError::DanglingEscape)?;
                if !ESCAPABLE.contains(&escaped) {
                    return Err(LexError::UnescapableCharacter(escaped));
                }
                TokenKind::Literal(escaped)
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' => TokenKind::Star,
            '|' => TokenKind::Pipe,
            other => TokenKind::Literal(other),
        };
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(pattern: &str) -> Vec<TokenKind> {
        lex(pattern).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_literals_and_structure() {
        use TokenKind::*;
        assert_eq!(
            kinds("ab*c"),
            vec![Literal('a'), Literal('b'), Star, Literal('c')]
        );
        assert_eq!(
            kinds("a|(b*)"),
            vec![Literal('a'), Pipe, LParen, Literal('b'), Star, RParen]
        );
    }

    #[test]
    fn escapes_structural_characters() {
        use TokenKind::*;
        assert_eq!(kinds("`*"), vec![Literal('*')]);
        assert_eq!(kinds("``"), vec![Literal('`')]);
        assert_eq!(kinds("`(`)"), vec![Literal('('), Literal(')')]);
    }

    #[test]
    fn empty_input_lexes_to_no_tokens() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn dangling_escape_errors() {
        assert_eq!(lex("a`"), Err(LexError::DanglingEscape));
    }

    #[test]
    fn escaping_a_non_metacharacter_errors() {
        assert_eq!(lex("`a"), Err(LexError::UnescapableCharacter('a')));
    }

    #[test]
    fn positions_count_tokens_not_bytes() {
        let tokens = lex("`*b").unwrap();
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[1].position, 2);
    }
}
