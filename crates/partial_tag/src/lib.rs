//! Grammars for field metadata strings and the variant directives they carry.
//!
//! A metadata string is a run of `key:"value"` entries. The value of one
//! configured entry (by default `partial`) is itself a comma-separated list of
//! directives, each naming a variant with an optional sign and rename:
//! `-Person,APerson,+BPerson:CPerson`.
//!
//! The two grammars are lexed and parsed independently.

mod ast;
mod errors;
mod lexer;
mod parser;
mod span;
mod tokens;

#[cfg(test)]
mod tests;

pub use ast::*;
pub use errors::{ParseError, TagError};
pub use parser::{directives_for, parse_directives, parse_metadata};
pub use span::Span;

/// Metadata key whose value drives variant resolution unless configured otherwise.
pub const DEFAULT_DIRECTIVE_KEY: &str = "partial";
