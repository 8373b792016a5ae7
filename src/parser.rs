//! Parser module for tinylang
//!
//! The parser here is a recognizer: it confirms that a token sequence follows
//! the grammar and reports the first place it does not. No syntax tree is
//! produced.

pub mod error;
pub mod grammar;
pub mod recognizer;

pub use error::{Expected, Found, ParseError};
pub use grammar::{statement_for, Production, StatementRule, STATEMENT_RULES};
pub use recognizer::{recognize, Recognizer, Summary};

use crate::error::Error;
use crate::lexer::lex;

/// Lex and recognize `source` in one step.
///
/// This is the primary entry point. Either stage failing aborts the run.
pub fn check(source: &str) -> Result<Summary, Error> {
    let tokens = lex(source)?;
    Ok(recognize(&tokens)?)
}
