//! # Parser
//! A single-pass recursive-descent parser over the token stream produced by [crate::lexer],
//! building the abstract syntax tree consumed by [crate::nfa]'s Thompson construction.
//!
//! ```text
//! EXP     -> TERM SUBEXP
//! SUBEXP  -> '|' TERM SUBEXP | ε
//! TERM    -> FACTOR SUBTERM
//! SUBTERM -> '*' FACTOR SUBTERM | FACTOR SUBTERM | '*' | ε
//! FACTOR  -> LITERAL | '(' EXP ')'
//! ```
//!
//! `*` binds to the nearest preceding FACTOR, concatenation is implicit between adjacent FACTORs,
//! and `|` is the loosest-binding operator. Each recursive call into `FACTOR` for a `(` pushes one
//! level of call-stack depth, which doubles as the parenthesis tracker: a `)` is only consumed by
//! the call frame that opened the matching `(`.

use crate::lexer::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// A node in the parsed expression tree. Owns its children outright — the tree never shares or
/// cycles, since it is built bottom-up from a token stream that is consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Literal(char),
    Concat(Box<Ast>, Box<Ast>),
    Alternation(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty pattern")]
    EmptyInput,
    #[error("unexpected end of pattern")]
    UnexpectedEnd,
    #[error("unexpected `{value}` at position {position}")]
    UnexpectedToken { position: usize, value: String },
    #[error("unmatched `(` at position {position}")]
    UnmatchedParen { position: usize },
}

/// Parses a full token stream into an [Ast]. Every token produced by [crate::lexer::lex] is
/// consumed exactly once; any token left over once the top-level expression has been parsed is
/// reported as [ParseError::UnexpectedToken].
pub fn parse(tokens: &[Token]) -> Result<Ast, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = Cursor { tokens, pos: 0 };
    let ast = cursor.exp()?;

    if let Some(token) = cursor.peek() {
        return Err(ParseError::UnexpectedToken {
            position: token.position,
            value: token.kind.to_string(),
        });
    }

    Ok(ast)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn can_start_factor(&self) -> bool {
        matches!(
            self.peek().map(|t| t.kind),
            Some(TokenKind::Literal(_)) | Some(TokenKind::LParen)
        )
    }

    /// EXP -> TERM SUBEXP
    fn exp(&mut self) -> Result<Ast, ParseError> {
        let term = self.term()?;

        match self.peek() {
            Some(token) if token.kind == TokenKind::Pipe => {
                self.eat();
                let rest = self.exp()?;
                Ok(Ast::Alternation(Box::new(term), Box::new(rest)))
            }
            _ => Ok(term),
        }
    }

    /// TERM -> FACTOR SUBTERM, where SUBTERM either continues concatenation or stops.
    fn term(&mut self) -> Result<Ast, ParseError> {
        let factor = self.factor_with_star()?;

        if self.can_start_factor() {
            let rest = self.term()?;
            Ok(Ast::Concat(Box::new(factor), Box::new(rest)))
        } else {
            Ok(factor)
        }
    }

    /// A FACTOR optionally followed by one `*`.
    fn factor_with_star(&mut self) -> Result<Ast, ParseError> {
        let factor = self.factor()?;

        match self.peek() {
            Some(token) if token.kind == TokenKind::Star => {
                self.eat();
                Ok(Ast::Star(Box::new(factor)))
            }
            _ => Ok(factor),
        }
    }

    /// FACTOR -> LITERAL | '(' EXP ')'
    fn factor(&mut self) -> Result<Ast, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match token.kind {
            TokenKind::Literal(c) => {
                self.eat();
                Ok(Ast::Literal(c))
            }
            TokenKind::LParen => {
                let open_position = token.position;
                self.eat();
                let inner = self.exp()?;
                match self.peek() {
                    Some(t) if t.kind == TokenKind::RParen => {
                        self.eat();
                        Ok(inner)
                    }
                    Some(t) => Err(ParseError::UnexpectedToken {
                        position: t.position,
                        value: t.kind.to_string(),
                    }),
                    None => Err(ParseError::UnmatchedParen {
                        position: open_position,
                    }),
                }
            }
            _ => Err(ParseError::UnexpectedToken {
                position: token.position,
                value: token.kind.to_string(),
            }),
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Literal(c) => write!(f, "{c}"),
            Ast::Concat(l, r) => write!(f, "({l}{r})"),
            Ast::Alternation(l, r) => write!(f, "({l}|{r})"),
            Ast::Star(inner) => write!(f, "({inner})*"),
        }
    }
}
