//! Front end for `partial`: reads a JSON record description, derives every
//! declared view with `partial_core`, and writes one file per view.

pub mod config;
pub mod error;
pub mod generate;
pub mod render;
pub mod source;
pub mod summary;

pub use config::{resolve_config, ResolvedConfig, CONFIG_FILE_NAME};
pub use error::{CliError, Result};
pub use generate::{
    generate, sha256_hex, GenerateInput, GenerateReport, GeneratedFile, Manifest,
    MANIFEST_FILE_NAME,
};
pub use render::{output_file_name, render_go, render_view, OutputFormat};
pub use source::{load_source, SourceUnit};
pub use summary::{summarize_records, FieldSummary, RecordSummary};
