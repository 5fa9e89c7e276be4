use std::path::Path;

use partial_core::resolve;
use serde::{Deserialize, Serialize};

use crate::config::resolve_config;
use crate::error::Result;
use crate::source::load_source;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: String,
    pub variants: Vec<String>,
}

/// What resolution decided for one record, or why it failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSummary {
    pub record: String,
    pub negative: Vec<String>,
    pub positive: Vec<String>,
    pub fields: Vec<FieldSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn summarize_records(
    input: &Path,
    type_name: Option<&str>,
    directive_key: Option<&str>,
) -> Result<Vec<RecordSummary>> {
    let source = load_source(input)?;
    let config = resolve_config(input, directive_key)?.config;

    let summaries = source
        .select(type_name)?
        .into_iter()
        .map(|record| match resolve(record, &config) {
            Ok(resolution) => RecordSummary {
                record: record.name.clone(),
                negative: resolution.variants.negative.iter().cloned().collect(),
                positive: resolution.variants.positive.iter().cloned().collect(),
                fields: resolution
                    .fields
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| FieldSummary {
                        name: field.name().to_string(),
                        variants: resolution
                            .variants_of(idx)
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    })
                    .collect(),
                error: None,
            },
            Err(err) => RecordSummary {
                record: record.name.clone(),
                negative: Vec::new(),
                positive: Vec::new(),
                fields: Vec::new(),
                error: Some(err.to_string()),
            },
        })
        .collect();
    Ok(summaries)
}
