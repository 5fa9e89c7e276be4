use partial_tag::{directives_for, parse_metadata};
use tracing::warn;

use crate::config::PartialConfig;
use crate::error::{DeriveError, Result};
use crate::record::{FieldDecl, FieldRecord, RecordDecl};

/// Parses every field's metadata and directive list, in declaration order.
///
/// The first directive failure aborts the record. A metadata string that fails
/// to parse only aborts when it visibly carries the directive key; otherwise
/// the field is kept without directives.
pub fn annotate_fields(record: &RecordDecl, config: &PartialConfig) -> Result<Vec<FieldRecord>> {
    record
        .fields
        .iter()
        .map(|field| annotate_field(record, field, &config.directive_key))
        .collect()
}

fn annotate_field(record: &RecordDecl, field: &FieldDecl, key: &str) -> Result<FieldRecord> {
    let Some(raw) = field.metadata.as_deref() else {
        return Ok(unannotated(field));
    };

    let metadata = match parse_metadata(raw) {
        Ok(metadata) => metadata,
        Err(err) if mentions_key(raw, key) => return Err(field_error(record, field, err)),
        Err(err) => {
            warn!(
                record = %record.name,
                field = %field.name,
                error = %err,
                "skipping unparsable field metadata"
            );
            return Ok(unannotated(field));
        }
    };

    let directives =
        directives_for(&metadata, key).map_err(|err| field_error(record, field, err))?;

    Ok(FieldRecord {
        decl: field.clone(),
        metadata: Some(metadata),
        directives,
    })
}

fn unannotated(field: &FieldDecl) -> FieldRecord {
    FieldRecord {
        decl: field.clone(),
        metadata: None,
        directives: Vec::new(),
    }
}

fn field_error(
    record: &RecordDecl,
    field: &FieldDecl,
    source: partial_tag::TagError,
) -> DeriveError {
    DeriveError::Field {
        record: record.name.clone(),
        field: field.name.clone(),
        source,
    }
}

/// True when `key` appears in `raw` in entry-key position: outside any quoted
/// value, at the start or after whitespace, a backtick or a closing quote, and
/// followed by `:`.
pub(crate) fn mentions_key(raw: &str, key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    let mut in_quotes = false;
    let mut escaped = false;
    let mut at_boundary = true;
    for (idx, c) in raw.char_indices() {
        if in_quotes {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => {
                    in_quotes = false;
                    at_boundary = true;
                }
                _ => {}
            }
            continue;
        }
        if at_boundary
            && raw[idx..].starts_with(key)
            && raw[idx + key.len()..].trim_start().starts_with(':')
        {
            return true;
        }
        match c {
            '"' => {
                in_quotes = true;
                at_boundary = false;
            }
            c => at_boundary = c.is_whitespace() || c == '`',
        }
    }
    false
}
