use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no record named {0} in input")]
    TypeNotFound(String),

    #[error("invalid directive key {0:?} (expected [A-Za-z][A-Za-z0-9_]*)")]
    InvalidDirectiveKey(String),

    #[error("no package name: pass --package or set \"package\" in the input")]
    MissingPackage,

    #[error("views {first} and {second} both write {}", .path.display())]
    DuplicateOutput {
        first: String,
        second: String,
        path: PathBuf,
    },
}

impl CliError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
