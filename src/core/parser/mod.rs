//! Command line parsing.
//!
//! Supports:
//! - Pipe operator: `cmd1 | cmd2`
//! - Redirect operator: `cmd > file`
//! - Quote handling: `"string with spaces"`
//!
//! Parsing happens in two passes: [`split`] cuts the raw line into
//! [`Segment`]s, then each segment's text goes through the [`Lexer`].

mod lexer;
mod pipeline;

pub use lexer::{tokenize, Lexer};
pub use pipeline::{split, validate, Operator, Segment};
