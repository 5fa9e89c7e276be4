use std::path::Path;

use partial_core::RecordDecl;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// The records of one source file, as produced by a host-language front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub records: Vec<RecordDecl>,
}

impl SourceUnit {
    /// All records, or only the one named `type_name`.
    pub fn select(&self, type_name: Option<&str>) -> Result<Vec<&RecordDecl>> {
        match type_name {
            None => Ok(self.records.iter().collect()),
            Some(name) => {
                let matched = self
                    .records
                    .iter()
                    .filter(|record| record.name == name)
                    .collect::<Vec<_>>();
                if matched.is_empty() {
                    return Err(CliError::TypeNotFound(name.to_string()));
                }
                Ok(matched)
            }
        }
    }
}

pub fn parse_source(bytes: &[u8], path: &Path) -> Result<SourceUnit> {
    serde_json::from_slice(bytes).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_source(path: &Path) -> Result<SourceUnit> {
    let bytes = std::fs::read(path).map_err(|err| CliError::io("read", path, err))?;
    parse_source(&bytes, path)
}
