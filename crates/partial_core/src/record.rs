//! Record descriptions exchanged with the host-language front end.

use serde::{Deserialize, Serialize};

use partial_tag::{Directive, Metadata};

/// One declared field, as handed over by the source parser and handed back in views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub type_expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            doc: None,
            comment: None,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A source record whose fields may carry variant directives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_params: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl RecordDecl {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            comment: None,
            type_params: None,
            fields,
        }
    }
}

/// A field together with its parsed annotation.
///
/// `metadata` is `None` when the field has no metadata string or when the
/// string was unparsable and skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldRecord {
    pub decl: FieldDecl,
    pub metadata: Option<Metadata>,
    pub directives: Vec<Directive>,
}

impl FieldRecord {
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn is_annotated(&self) -> bool {
        !self.directives.is_empty()
    }

    pub(crate) fn names_negatively(&self, variant: &str) -> bool {
        self.directives
            .iter()
            .any(|d| d.variant == variant && d.is_negative())
    }

    pub(crate) fn names_positively(&self, variant: &str) -> bool {
        self.directives
            .iter()
            .any(|d| d.variant == variant && !d.is_negative())
    }
}
