//! Predictive descent recognizer
//!
//! Each production is a method sharing one cursor into an immutable token
//! slice, built on `expect`. Nothing is backtracked and nothing is built:
//! success is reported as a [`Summary`] of what was seen.
//!
//! `Program` is a single loop over every nesting level. `Conditional` consumes
//! its header up to `{` and opens a block; the loop closes the innermost open
//! block when it meets `}`. Open blocks are a counter, not stack frames, so
//! nesting depth is limited only by the input.
//!
//! Grammar:
//!
//! ```text
//! Program     := { Declaration | Assignment | Conditional }
//! Declaration := KEYWORD(int|float) IDENTIFIER ASSIGN NUMBER SEMICOLON
//! Assignment  := IDENTIFIER ASSIGN Expression SEMICOLON
//! Expression  := (IDENTIFIER|NUMBER) OPERATOR (IDENTIFIER|NUMBER)
//! Conditional := KEYWORD(if) LPAREN IDENTIFIER OPERATOR NUMBER RPAREN
//!                LBRACE Program RBRACE
//! ```
//!
//! `Expression` takes exactly one operator. There is no precedence and no
//! nesting.

use crate::lexer::{Kind, Token};
use crate::parser::error::{Expected, ParseError};
use crate::parser::grammar::{statement_for, Production, BLOCK_END};
use serde::Serialize;

/// What a successful run recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Statements at every nesting level
    pub statements: usize,
    pub declarations: usize,
    pub assignments: usize,
    pub conditionals: usize,
    /// Deepest block nesting reached; 0 for a program without conditionals
    pub max_depth: usize,
}

pub struct Recognizer<'t, 'src> {
    tokens: &'t [Token<'src>],
    cursor: usize,
    depth: usize,
    summary: Summary,
}

impl<'t, 'src> Recognizer<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
            summary: Summary::default(),
        }
    }

    /// Rewind to the first token and forget previous results
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.depth = 0;
        self.summary = Summary::default();
    }

    /// Index of the next unconsumed token
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Recognize the whole token slice as a top-level program.
    ///
    /// Always starts from the first token, so calling it again gives the same
    /// outcome.
    pub fn recognize(&mut self) -> Result<Summary, ParseError> {
        self.reset();
        self.program()?;

        // A top-level program only ends with the input; a stray `}` is an error
        if let Some(token) = self.peek() {
            return Err(ParseError::unexpected(
                Production::Program,
                Expected::EndOfInput,
                Some(token),
            ));
        }

        Ok(self.summary)
    }

    fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// Consume the lookahead if it has the expected kind
    fn expect(
        &mut self,
        kind: Kind,
        production: Production,
    ) -> Result<&'t Token<'src>, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                Ok(token)
            }
            other => Err(ParseError::unexpected(production, Expected::Kind(kind), other)),
        }
    }

    fn program(&mut self) -> Result<(), ParseError> {
        while let Some(token) = self.peek() {
            if token.kind == BLOCK_END {
                // At top level `recognize` reports the stray `}`
                if self.depth == 0 {
                    break;
                }
                self.close_block()?;
                continue;
            }

            match statement_for(token) {
                Some(Production::Declaration) => self.declaration()?,
                Some(Production::Assignment) => self.assignment()?,
                Some(Production::Conditional) => self.conditional()?,
                _ => {
                    return Err(ParseError::unexpected(
                        Production::Program,
                        Expected::Statement,
                        Some(token),
                    ))
                }
            }
            self.summary.statements += 1;
        }

        if self.depth > 0 {
            return Err(ParseError::unexpected(
                Production::Conditional,
                Expected::Kind(BLOCK_END),
                None,
            ));
        }
        Ok(())
    }

    fn declaration(&mut self) -> Result<(), ParseError> {
        let production = Production::Declaration;
        self.expect(Kind::Keyword, production)?;
        self.expect(Kind::Identifier, production)?;
        self.expect(Kind::Assign, production)?;
        self.expect(Kind::Number, production)?;
        self.expect(Kind::Semicolon, production)?;
        self.summary.declarations += 1;
        Ok(())
    }

    fn assignment(&mut self) -> Result<(), ParseError> {
        let production = Production::Assignment;
        self.expect(Kind::Identifier, production)?;
        self.expect(Kind::Assign, production)?;
        self.expression()?;
        self.expect(Kind::Semicolon, production)?;
        self.summary.assignments += 1;
        Ok(())
    }

    fn expression(&mut self) -> Result<(), ParseError> {
        self.operand()?;
        self.expect(Kind::Operator, Production::Expression)?;
        self.operand()
    }

    fn operand(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) if token.kind.is_operand() => {
                self.advance();
                Ok(())
            }
            other => Err(ParseError::unexpected(
                Production::Expression,
                Expected::Operand,
                other,
            )),
        }
    }

    /// Consume a conditional header and open its block
    fn conditional(&mut self) -> Result<(), ParseError> {
        let production = Production::Conditional;
        self.expect(Kind::Keyword, production)?;
        self.expect(Kind::LParen, production)?;
        self.expect(Kind::Identifier, production)?;
        self.expect(Kind::Operator, production)?;
        self.expect(Kind::Number, production)?;
        self.expect(Kind::RParen, production)?;
        self.expect(Kind::LBrace, production)?;

        self.depth += 1;
        self.summary.max_depth = self.summary.max_depth.max(self.depth);
        self.summary.conditionals += 1;
        Ok(())
    }

    fn close_block(&mut self) -> Result<(), ParseError> {
        self.expect(BLOCK_END, Production::Conditional)?;
        self.depth -= 1;
        Ok(())
    }
}

/// Recognize a token slice with a fresh recognizer
pub fn recognize(tokens: &[Token<'_>]) -> Result<Summary, ParseError> {
    Recognizer::new(tokens).recognize()
}
