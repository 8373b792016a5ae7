//! The statement dispatch table
//!
//! `Program` picks a production by looking at a single token. The table below
//! is that choice, fixed at compile time and shared by every recognizer.

use crate::lexer::{Kind, Token};
use serde::Serialize;
use std::fmt;

/// Named grammar rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Production {
    Program,
    Declaration,
    Assignment,
    Expression,
    Conditional,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Production::Program => "Program",
            Production::Declaration => "Declaration",
            Production::Assignment => "Assignment",
            Production::Expression => "Expression",
            Production::Conditional => "Conditional",
        };
        f.write_str(name)
    }
}

/// One row of the dispatch table. `lexeme: None` accepts any lexeme.
#[derive(Debug, Clone, Copy)]
pub struct StatementRule {
    pub kind: Kind,
    pub lexeme: Option<&'static str>,
    pub production: Production,
}

impl StatementRule {
    fn matches(&self, token: &Token<'_>) -> bool {
        token.kind == self.kind && self.lexeme.map_or(true, |word| token.lexeme == word)
    }
}

pub const STATEMENT_RULES: &[StatementRule] = &[
    StatementRule {
        kind: Kind::Keyword,
        lexeme: Some("int"),
        production: Production::Declaration,
    },
    StatementRule {
        kind: Kind::Keyword,
        lexeme: Some("float"),
        production: Production::Declaration,
    },
    StatementRule {
        kind: Kind::Identifier,
        lexeme: None,
        production: Production::Assignment,
    },
    StatementRule {
        kind: Kind::Keyword,
        lexeme: Some("if"),
        production: Production::Conditional,
    },
];

/// The statement production a lookahead token starts, if any
pub fn statement_for(token: &Token<'_>) -> Option<Production> {
    STATEMENT_RULES
        .iter()
        .find(|rule| rule.matches(token))
        .map(|rule| rule.production)
}

/// Kind that closes a nested `Program`
pub const BLOCK_END: Kind = Kind::RBrace;
