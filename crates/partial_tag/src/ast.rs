use std::fmt;

use serde::{Deserialize, Serialize};

/// One `key:"value"` pair. The value is held unescaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
    /// The quoted literal exactly as it appeared in the parsed input.
    /// Display writes it back unchanged; entries built in code have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl MetadataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            literal: None,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }
}

impl fmt::Display for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{}:{}", self.key, literal),
            None => write!(f, "{}:\"{}\"", self.key, escape_value(&self.value)),
        }
    }
}

/// The ordered entries of one field's metadata string.
///
/// Key uniqueness is not enforced; lookups return the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn new(entries: Vec<MetadataEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Drops every entry with `key`, keeping the rest in order.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|entry| entry.key != key);
    }

    pub fn without(&self, key: &str) -> Metadata {
        let mut stripped = self.clone();
        stripped.remove(key);
        stripped
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Whether a directive claims, explicitly claims, or excludes its variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sign {
    Unsigned,
    Positive,
    Negative,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        match self {
            Sign::Negative => true,
            Sign::Unsigned | Sign::Positive => false,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Sign::Unsigned => "",
            Sign::Positive => "+",
            Sign::Negative => "-",
        }
    }
}

/// One clause of a variant directive: `Name`, `+Name`, `-Name`, `Name:Alias`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directive {
    pub sign: Sign,
    pub variant: String,
    pub rename_as: Option<String>,
}

impl Directive {
    pub fn new(sign: Sign, variant: impl Into<String>) -> Self {
        Self {
            sign,
            variant: variant.into(),
            rename_as: None,
        }
    }

    pub fn renamed(mut self, alias: impl Into<String>) -> Self {
        self.rename_as = Some(alias.into());
        self
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.prefix(), self.variant)?;
        if let Some(alias) = &self.rename_as {
            write!(f, ":{}", alias)?;
        }
        Ok(())
    }
}

/// Joins directives back into the `A,-B,+C:D` form.
pub fn format_directives(directives: &[Directive]) -> String {
    directives
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            other => out.push(other),
        }
    }
    out
}
