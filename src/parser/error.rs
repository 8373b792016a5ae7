//! Recognition errors

use crate::lexer::{Kind, Span, Token};
use crate::parser::grammar::Production;
use std::fmt;

/// What the active production needed at the failing position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A token of exactly this kind
    Kind(Kind),
    /// An `IDENTIFIER` or a `NUMBER`
    Operand,
    /// The start of a declaration, assignment or conditional
    Statement,
    /// Nothing: the program should have ended
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Operand => f.write_str("IDENTIFIER or NUMBER"),
            Expected::Statement => f.write_str("a statement"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Owned copy of the offending token, so errors outlive the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub kind: Kind,
    pub lexeme: String,
    pub span: Span,
}

impl From<&Token<'_>> for Found {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind,
            lexeme: token.lexeme.to_string(),
            span: token.span,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.lexeme, self.span)
    }
}

/// Errors that abort recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `found` is `None` when the token stream ran out
    UnexpectedToken {
        production: Production,
        expected: Expected,
        found: Option<Found>,
    },
}

impl ParseError {
    pub(crate) fn unexpected(
        production: Production,
        expected: Expected,
        found: Option<&Token<'_>>,
    ) -> Self {
        ParseError::UnexpectedToken {
            production,
            expected,
            found: found.map(Found::from),
        }
    }

    pub fn production(&self) -> Production {
        match self {
            ParseError::UnexpectedToken { production, .. } => *production,
        }
    }

    pub fn expected(&self) -> Expected {
        match self {
            ParseError::UnexpectedToken { expected, .. } => *expected,
        }
    }

    pub fn found(&self) -> Option<&Found> {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.as_ref(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                production,
                expected,
                found: Some(found),
            } => write!(f, "{}: expected {}, found {}", production, expected, found),
            ParseError::UnexpectedToken {
                production,
                expected,
                found: None,
            } => write!(f, "{}: expected {}, found end of input", production, expected),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_token() {
        let token = Token::new(Kind::Assign, "=", Span::new(4, 5));
        let error = ParseError::unexpected(
            Production::Declaration,
            Expected::Kind(Kind::Identifier),
            Some(&token),
        );
        assert_eq!(
            error.to_string(),
            "Declaration: expected IDENTIFIER, found ASSIGN \"=\" at 4..5"
        );
    }

    #[test]
    fn test_display_at_end_of_input() {
        let error =
            ParseError::unexpected(Production::Conditional, Expected::Kind(Kind::RBrace), None);
        assert_eq!(
            error.to_string(),
            "Conditional: expected RBRACE, found end of input"
        );
        assert!(error.found().is_none());
    }

    #[test]
    fn test_expected_display() {
        assert_eq!(Expected::Operand.to_string(), "IDENTIFIER or NUMBER");
        assert_eq!(Expected::Statement.to_string(), "a statement");
        assert_eq!(Expected::EndOfInput.to_string(), "end of input");
    }
}
