//! Top-level error type for a full lex + recognize run

use crate::lexer::{LexError, LexFailure};
use crate::parser::ParseError;
use std::fmt;

/// Errors that abort analysis of a program. Both are fatal; nothing resumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(error) => write!(f, "Lexical error: {}", error),
            Error::Parse(error) => write!(f, "Syntax error: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(error) => Some(error),
            Error::Parse(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Error::Lex(error)
    }
}

impl From<LexFailure<'_>> for Error {
    fn from(failure: LexFailure<'_>) -> Self {
        Error::Lex(failure.error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Parse(error)
    }
}
