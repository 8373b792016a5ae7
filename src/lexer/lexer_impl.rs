//! Implementation of the tinylang lexer
//!
//! Classification is handled entirely by logos. This module wraps the logos
//! lexer into an iterator of [`Token`]s and turns the first unmatched input
//! into a [`LexError`], after which the iterator is exhausted.

use crate::lexer::tokens::{Kind, Span, Token};
use logos::Logos;
use std::fmt;

/// 1-based line and column of a byte offset. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate `offset` in `source`. Offsets past the end clamp to the end.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, ch) in source.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Input at some position matched no token pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnrecognizedCharacter {
        character: char,
        offset: usize,
        position: Position,
    },
}

impl LexError {
    fn unrecognized(source: &str, offset: usize) -> Self {
        // Logos reports error spans on byte boundaries; snap back to the
        // start of the character containing the offset.
        let (offset, character) = source
            .char_indices()
            .take_while(|(index, _)| *index <= offset)
            .last()
            .unwrap_or((offset, char::REPLACEMENT_CHARACTER));

        LexError::UnrecognizedCharacter {
            character,
            offset,
            position: Position::from_offset(source, offset),
        }
    }

    /// Byte offset of the offending character
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { offset, .. } => *offset,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::UnrecognizedCharacter { position, .. } => *position,
        }
    }

    pub fn character(&self) -> char {
        match self {
            LexError::UnrecognizedCharacter { character, .. } => *character,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter {
                character,
                position,
                ..
            } => write!(
                f,
                "Unrecognized character {:?} at line {}, column {}",
                character, position.line, position.column
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Lazy token sequence over a source string.
///
/// Yields `Ok` tokens left to right. The first unrecognized character yields
/// a single `Err`, after which iteration stops for good.
pub struct Tokens<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, Kind>,
    failed: bool,
}

impl<'src> Tokens<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: Kind::lexer(source),
            failed: false,
        }
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.inner.next()?;
        let span = self.inner.span();
        match result {
            Ok(kind) => Some(Ok(Token::new(kind, self.inner.slice(), Span::from(span)))),
            Err(()) => {
                self.failed = true;
                Some(Err(LexError::unrecognized(self.source, span.start)))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Start a lazy tokenization of `source`. Each call starts from the beginning.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}
