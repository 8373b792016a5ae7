//! Token definitions for tinylang
//!
//! [`Kind`] is the closed set of lexical categories, derived with logos. Logos
//! resolves overlapping patterns by longest match first and then by priority,
//! where literal tokens outrank regexes of the same length. That gives the
//! classification order the language needs without any hand-written
//! lookahead:
//!
//! - `int` matches both the `int` literal and the identifier regex with the
//!   same length, so the literal wins and it is a keyword.
//! - `integer` is longer as an identifier, so it never splits into `int` +
//!   `eger`.
//! - `=` only exists as [`Kind::Assign`]; [`Kind::Operator`] never sees it.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Reserved words. All of them lex as [`Kind::Keyword`].
pub const KEYWORDS: &[&str] = &["if", "else", "int", "float"];

/// All possible token kinds in tinylang
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    #[token("if")]
    #[token("else")]
    #[token("int")]
    #[token("float")]
    Keyword,

    // Integer or decimal; the fraction digits are optional so "3." is a number
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[token("=")]
    Assign,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("<")]
    #[token(">")]
    Operator,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
}

impl Kind {
    /// Upper-case name used in diagnostics and simple output.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Keyword => "KEYWORD",
            Kind::Number => "NUMBER",
            Kind::Assign => "ASSIGN",
            Kind::Operator => "OPERATOR",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::LBrace => "LBRACE",
            Kind::RBrace => "RBRACE",
            Kind::Semicolon => "SEMICOLON",
            Kind::Identifier => "IDENTIFIER",
        }
    }

    /// Check if this kind can stand on either side of a binary expression
    pub fn is_operand(&self) -> bool {
        matches!(self, Kind::Identifier | Kind::Number)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range of a token in its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<logos::Span> for Span {
    fn from(range: logos::Span) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified lexeme. The lexeme borrows from the source it was lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: Kind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: Kind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Check if this token is the given reserved word
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == Kind::Keyword && self.lexeme == word
    }

    /// The `(Kind, Lexeme)` pair without position information
    pub fn pair(&self) -> (Kind, &'src str) {
        (self.kind, self.lexeme)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.lexeme)
    }
}
