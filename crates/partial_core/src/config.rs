use serde::{Deserialize, Serialize};

use partial_tag::DEFAULT_DIRECTIVE_KEY;

/// Settings consumed by variant resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialConfig {
    /// Metadata key whose value is parsed as the directive list.
    #[serde(default = "default_directive_key")]
    pub directive_key: String,
}

impl PartialConfig {
    pub fn with_directive_key(key: impl Into<String>) -> Self {
        Self {
            directive_key: key.into(),
        }
    }
}

impl Default for PartialConfig {
    fn default() -> Self {
        Self {
            directive_key: default_directive_key(),
        }
    }
}

fn default_directive_key() -> String {
    DEFAULT_DIRECTIVE_KEY.to_string()
}
