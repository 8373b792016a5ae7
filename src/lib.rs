//! # tinylang
//!
//! A lexer and predictive descent recognizer for a tiny imperative language:
//! `int`/`float` declarations, assignments of two-operand expressions, and
//! `if` conditionals with braced blocks.
//!
//! ```text
//! int x = 10;
//! if (x > 0) { x = x - 1; }
//! ```
//!
//! [`lexer`] turns source text into `(Kind, Lexeme)` tokens, [`parser`]
//! confirms those tokens follow the grammar, and [`processor`] renders either
//! stage in the output formats used by the `tinylang` binary.

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod samples;

pub use error::Error;
pub use lexer::{lex, tokenize, Kind, Token};
pub use parser::{check, recognize, Summary};
