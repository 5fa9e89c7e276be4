use std::fmt;

/// Tokens of the `key:"value" key:"value"` metadata grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MetaToken {
    Ident(String),
    /// Decoded value and the quoted literal it was read from.
    Str { value: String, literal: String },
    Colon,
}

impl fmt::Display for MetaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaToken::Ident(s) => write!(f, "identifier `{}`", s),
            MetaToken::Str { literal, .. } => write!(f, "string {}", literal),
            MetaToken::Colon => write!(f, "':'"),
        }
    }
}

/// Tokens of the `-A,B,+C:D` directive grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum DirectiveToken {
    Ident(String),
    Plus,
    Minus,
    Colon,
    Comma,
}

impl fmt::Display for DirectiveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveToken::Ident(s) => write!(f, "identifier `{}`", s),
            DirectiveToken::Plus => write!(f, "'+'"),
            DirectiveToken::Minus => write!(f, "'-'"),
            DirectiveToken::Colon => write!(f, "':'"),
            DirectiveToken::Comma => write!(f, "','"),
        }
    }
}
