//! `partial.toml` lookup.
//!
//! ```toml
//! [directive]
//! key = "partial"
//! ```

use std::path::{Path, PathBuf};

use partial_core::PartialConfig;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "partial.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: PartialConfig,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct PartialToml {
    directive: Option<PartialTomlDirectiveSection>,
}

#[derive(Debug, Deserialize)]
struct PartialTomlDirectiveSection {
    key: Option<String>,
}

/// Reads `partial.toml` next to `root_hint` (a file or directory) and applies
/// `key_override` on top. A missing file or blank key means the default key.
pub fn resolve_config(root_hint: &Path, key_override: Option<&str>) -> Result<ResolvedConfig> {
    let path = config_path_for_root_hint(root_hint);
    let (mut config, source) = if path.exists() {
        let raw = std::fs::read_to_string(&path).map_err(|err| CliError::io("read", &path, err))?;
        let parsed: PartialToml = toml::from_str(&raw).map_err(|source| CliError::Toml {
            path: path.clone(),
            source,
        })?;
        let config = parsed
            .directive
            .and_then(|section| section.key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(PartialConfig::with_directive_key)
            .unwrap_or_default();
        (config, Some(path))
    } else {
        (PartialConfig::default(), None)
    };

    if let Some(key) = key_override {
        config.directive_key = key.to_string();
    }
    if !is_valid_key(&config.directive_key) {
        return Err(CliError::InvalidDirectiveKey(config.directive_key));
    }

    debug!(key = %config.directive_key, source = ?source, "resolved config");
    Ok(ResolvedConfig { config, source })
}

fn config_path_for_root_hint(root_hint: &Path) -> PathBuf {
    let base = if root_hint.is_file() {
        root_hint.parent().unwrap_or_else(|| Path::new("."))
    } else {
        root_hint
    };
    base.join(CONFIG_FILE_NAME)
}

/// Metadata keys follow the identifier rule of the metadata grammar.
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
