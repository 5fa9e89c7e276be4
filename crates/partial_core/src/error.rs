use partial_tag::TagError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeriveError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeriveError {
    /// A field's annotation could not be parsed; the whole record is abandoned.
    #[error("record {record}, field {field}: {source}")]
    Field {
        record: String,
        field: String,
        #[source]
        source: TagError,
    },
}

impl DeriveError {
    pub fn tag_error(&self) -> &TagError {
        match self {
            DeriveError::Field { source, .. } => source,
        }
    }
}
