use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PartialConfig;
use crate::error::Result;
use crate::record::{FieldDecl, FieldRecord, RecordDecl};
use crate::variants::{includes, resolve, Resolution};

/// One derived type: the source record filtered down to a variant's fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordView {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_params: Option<String>,
    pub fields: Vec<FieldDecl>,
}

impl RecordView {
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

impl Resolution<'_> {
    /// Builds the view for `variant`, or `None` if it is not a resolved variant.
    pub fn emit(&self, variant: &str) -> Option<RecordView> {
        let policy = self.variants.policy(variant)?;
        let fields = self
            .fields
            .iter()
            .filter(|field| includes(field, variant, policy))
            .map(|field| FieldDecl {
                metadata: stripped_metadata(field, &self.directive_key),
                ..field.decl.clone()
            })
            .collect::<Vec<_>>();

        debug!(
            record = %self.record.name,
            variant,
            ?policy,
            kept = fields.len(),
            "emitted view"
        );

        Some(RecordView {
            name: variant.to_string(),
            doc: self.record.doc.clone(),
            comment: self.record.comment.clone(),
            type_params: self.record.type_params.clone(),
            fields,
        })
    }

    /// One view per resolved variant, negative-set variants first.
    pub fn emit_all(&self) -> Vec<RecordView> {
        self.variants
            .names()
            .filter_map(|variant| self.emit(variant))
            .collect()
    }
}

/// Resolves `record` and emits every view it declares.
pub fn derive_views(record: &RecordDecl, config: &PartialConfig) -> Result<Vec<RecordView>> {
    Ok(resolve(record, config)?.emit_all())
}

/// Metadata re-serialized without the directive key; `None` once nothing is left.
/// Fields whose metadata could not be parsed keep their raw string, minus any
/// wrapping backticks.
fn stripped_metadata(field: &FieldRecord, directive_key: &str) -> Option<String> {
    match &field.metadata {
        Some(metadata) => {
            let stripped = metadata.without(directive_key);
            if stripped.is_empty() {
                None
            } else {
                Some(stripped.to_string())
            }
        }
        None => field
            .decl
            .metadata
            .as_deref()
            .map(|raw| raw.trim_matches('`'))
            .filter(|raw| !raw.is_empty())
            .map(str::to_string),
    }
}
