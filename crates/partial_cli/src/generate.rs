use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use partial_core::{resolve, DeriveError, RecordView};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::config::resolve_config;
use crate::error::{CliError, Result};
use crate::render::{output_file_name, render_view, OutputFormat};
use crate::source::parse_source;

pub const MANIFEST_FILE_NAME: &str = "partial-manifest.json";
pub const MANIFEST_SCHEMA_ID: &str = "partial-manifest/0";

#[derive(Debug, Clone)]
pub struct GenerateInput<'a> {
    pub input: &'a Path,
    pub type_name: Option<&'a str>,
    pub out_dir: Option<&'a Path>,
    pub format: OutputFormat,
    pub directive_key: Option<&'a str>,
    pub package: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    pub record: String,
    pub variant: String,
    /// File name relative to the manifest's directory.
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub schema_id: String,
    pub input: String,
    pub input_sha256: String,
    pub directive_key: String,
    pub files: Vec<GeneratedFile>,
}

#[derive(Debug)]
pub struct GenerateReport {
    pub out_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    /// Records that were skipped because an annotation failed to parse.
    pub failures: Vec<DeriveError>,
}

struct PlannedFile {
    record: String,
    view: RecordView,
    file_name: String,
    content: String,
}

/// Derives and writes every view declared by the input's records.
///
/// A record with a malformed annotation is skipped and reported in
/// [`GenerateReport::failures`]; the remaining records are still written.
pub fn generate(request: &GenerateInput<'_>) -> Result<GenerateReport> {
    let bytes = fs::read(request.input).map_err(|err| CliError::io("read", request.input, err))?;
    let source = parse_source(&bytes, request.input)?;
    let resolved = resolve_config(request.input, request.directive_key)?;
    let config = resolved.config;

    let package = request
        .package
        .map(str::to_string)
        .or_else(|| source.package.clone());
    let package = match (request.format, package) {
        (OutputFormat::Go, None) => return Err(CliError::MissingPackage),
        (_, package) => package.unwrap_or_default(),
    };

    let mut planned = Vec::new();
    let mut failures = Vec::new();
    for record in source.select(request.type_name)? {
        let resolution = match resolve(record, &config) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(record = %record.name, error = %err, "skipping record");
                failures.push(err);
                continue;
            }
        };
        for view in resolution.emit_all() {
            let content = render_view(&view, &package, request.format)?;
            planned.push(PlannedFile {
                record: record.name.clone(),
                file_name: output_file_name(&view.name, request.format),
                view,
                content,
            });
        }
    }

    let out_dir = request
        .out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_out_dir(request.input));
    check_collisions(&planned, &out_dir)?;

    fs::create_dir_all(&out_dir).map_err(|err| CliError::io("create", &out_dir, err))?;
    let mut files = Vec::with_capacity(planned.len());
    for file in planned {
        let path = out_dir.join(&file.file_name);
        fs::write(&path, file.content.as_bytes())
            .map_err(|err| CliError::io("write", &path, err))?;
        debug!(path = %path.display(), variant = %file.view.name, "wrote view");
        files.push(GeneratedFile {
            record: file.record,
            variant: file.view.name,
            path: file.file_name,
            sha256: sha256_hex(file.content.as_bytes()),
        });
    }

    let manifest = Manifest {
        schema_id: MANIFEST_SCHEMA_ID.to_string(),
        input: request.input.display().to_string(),
        input_sha256: sha256_hex(&bytes),
        directive_key: config.directive_key,
        files,
    };
    let manifest_path = out_dir.join(MANIFEST_FILE_NAME);
    let mut manifest_json = serde_json::to_string_pretty(&manifest)?;
    manifest_json.push('\n');
    fs::write(&manifest_path, manifest_json)
        .map_err(|err| CliError::io("write", &manifest_path, err))?;

    info!(
        files = manifest.files.len(),
        failures = failures.len(),
        "generation finished"
    );
    Ok(GenerateReport {
        out_dir,
        manifest_path,
        manifest,
        failures,
    })
}

/// Generated files land next to the input unless told otherwise.
fn default_out_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn check_collisions(planned: &[PlannedFile], out_dir: &Path) -> Result<()> {
    let mut seen: HashMap<&str, String> = HashMap::new();
    for file in planned {
        let label = format!("{}.{}", file.record, file.view.name);
        if let Some(first) = seen.insert(file.file_name.as_str(), label.clone()) {
            return Err(CliError::DuplicateOutput {
                first,
                second: label,
                path: out_dir.join(&file.file_name),
            });
        }
    }
    Ok(())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
