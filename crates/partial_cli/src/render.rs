use partial_core::RecordView;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Go,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Go => "go",
            OutputFormat::Json => "json",
        }
    }
}

/// Output file name for a view: the lowercased variant name.
pub fn output_file_name(variant: &str, format: OutputFormat) -> String {
    format!("{}.{}", variant.to_lowercase(), format.extension())
}

pub fn render_view(view: &RecordView, package: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Go => Ok(render_go(view, package)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(view)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Renders a view as a generated Go struct declaration.
pub fn render_go(view: &RecordView, package: &str) -> String {
    let mut out = String::new();
    out.push_str("// DO NOT EDIT.\n");
    out.push_str(&format!("package {}\n\n", package));

    push_doc(&mut out, "", view.doc.as_deref());
    out.push_str(&format!("type {}", view.name));
    if let Some(params) = view.type_params.as_deref() {
        out.push_str(&format!("[{}]", params));
    }
    out.push_str(" struct {\n");

    for field in &view.fields {
        push_doc(&mut out, "\t", field.doc.as_deref());
        out.push_str(&format!("\t{} {}", field.name, field.type_expr));
        if let Some(metadata) = field.metadata.as_deref() {
            out.push_str(&format!(" `{}`", metadata));
        }
        if let Some(comment) = field.comment.as_deref() {
            out.push_str(&format!(" // {}", comment));
        }
        out.push('\n');
    }

    out.push('}');
    if let Some(comment) = view.comment.as_deref() {
        out.push_str(&format!(" // {}", comment));
    }
    out.push('\n');
    out
}

fn push_doc(out: &mut String, indent: &str, doc: Option<&str>) {
    let Some(doc) = doc else {
        return;
    };
    for line in doc.lines() {
        if line.is_empty() {
            out.push_str(&format!("{}//\n", indent));
        } else {
            out.push_str(&format!("{}// {}\n", indent, line));
        }
    }
}
