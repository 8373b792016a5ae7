//! Lexer module for tinylang
//!
//! This module contains the tokenization logic, including token definitions
//! and the lexer implementation.
//!
//! Two entry points are provided. [`tokenize`] is lazy: it yields tokens as
//! the source is scanned and stops at the first unrecognized character.
//! [`lex`] materializes the whole sequence for the recognizer, which walks a
//! slice with a cursor instead of consuming a queue.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError, Position, Tokens};
pub use tokens::{Kind, Span, Token, KEYWORDS};

use std::fmt;

/// Tokenization stopped early. Carries everything lexed before the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LexFailure<'src> {
    pub tokens: Vec<Token<'src>>,
    pub error: LexError,
}

impl fmt::Display for LexFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after {} token(s))", self.error, self.tokens.len())
    }
}

impl std::error::Error for LexFailure<'_> {}

/// Tokenize the whole source into an ordered collection
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexFailure<'_>> {
    let mut tokens = Vec::new();
    for result in tokenize(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => return Err(LexFailure { tokens, error }),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_collects_all_tokens() {
        let tokens = lex("int x = 10;").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].pair(), (Kind::Keyword, "int"));
        assert_eq!(tokens[4].pair(), (Kind::Semicolon, ";"));
    }

    #[test]
    fn test_lex_failure_keeps_prefix() {
        let failure = lex("x @ 5;").unwrap_err();
        assert_eq!(failure.tokens.len(), 1);
        assert_eq!(failure.tokens[0].pair(), (Kind::Identifier, "x"));
        assert_eq!(failure.error.character(), '@');
        assert_eq!(failure.error.offset(), 2);
        assert_eq!(
            failure.to_string(),
            "Unrecognized character '@' at line 1, column 3 (after 1 token(s))"
        );
    }

    #[test]
    fn test_lex_empty() {
        assert_eq!(lex("").unwrap(), vec![]);
    }
}
