use chumsky::error::Simple;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::{make_span, Span};

/// One located syntax problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    /// The `key:"value"` metadata string is malformed.
    #[error("malformed metadata `{raw}`: {}", join_messages(.errors))]
    MetadataSyntax { raw: String, errors: Vec<ParseError> },

    /// The variant directive value is malformed.
    #[error("malformed variant directive `{raw}`: {}", join_messages(.errors))]
    DirectiveSyntax { raw: String, errors: Vec<ParseError> },
}

impl TagError {
    pub fn raw(&self) -> &str {
        match self {
            TagError::MetadataSyntax { raw, .. } | TagError::DirectiveSyntax { raw, .. } => raw,
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        match self {
            TagError::MetadataSyntax { errors, .. } | TagError::DirectiveSyntax { errors, .. } => {
                errors
            }
        }
    }
}

fn join_messages(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn to_parse_error<T: Display + std::hash::Hash + std::cmp::Eq>(
    err: Simple<T>,
    input_len: usize,
) -> ParseError {
    ParseError {
        message: err.to_string(),
        span: make_span(err.span(), input_len),
    }
}
