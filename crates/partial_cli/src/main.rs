use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use partial_cli::{generate, summarize_records, GenerateInput, OutputFormat};

#[derive(Parser)]
#[command(
    name = "partial",
    version,
    about = "Derive view types from annotated record fields"
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one file per derived view
    Generate(GenerateArgs),
    /// Print each record's resolved variants as JSON
    Resolve(ResolveArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// JSON record description
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Only derive views for this record
    #[arg(long = "type", value_name = "NAME")]
    type_name: Option<String>,

    /// Output directory (default: the input's directory)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Go)]
    format: OutputFormat,

    /// Metadata key holding the directives (overrides partial.toml)
    #[arg(long, value_name = "KEY")]
    directive_key: Option<String>,

    /// Package name for Go output (overrides the input's package)
    #[arg(long, value_name = "NAME")]
    package: Option<String>,
}

#[derive(Parser)]
struct ResolveArgs {
    /// JSON record description
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Only resolve this record
    #[arg(long = "type", value_name = "NAME")]
    type_name: Option<String>,

    /// Metadata key holding the directives (overrides partial.toml)
    #[arg(long, value_name = "KEY")]
    directive_key: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Resolve(args) => run_resolve(args),
    };
    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let report = generate(&GenerateInput {
        input: &args.input,
        type_name: args.type_name.as_deref(),
        out_dir: args.out_dir.as_deref(),
        format: args.format,
        directive_key: args.directive_key.as_deref(),
        package: args.package.as_deref(),
    })
    .map_err(|err| err.to_string())?;

    for file in &report.manifest.files {
        println!("wrote={}", report.out_dir.join(&file.path).display());
    }
    println!("manifest={}", report.manifest_path.display());

    if report.failures.is_empty() {
        return Ok(());
    }
    for failure in &report.failures {
        eprintln!("error: {}", failure);
    }
    Err(format!("{} record(s) failed", report.failures.len()))
}

fn run_resolve(args: ResolveArgs) -> Result<(), String> {
    let summaries = summarize_records(
        &args.input,
        args.type_name.as_deref(),
        args.directive_key.as_deref(),
    )
    .map_err(|err| err.to_string())?;
    let json = serde_json::to_string_pretty(&summaries).map_err(|err| err.to_string())?;
    println!("{}", json);
    if summaries.iter().any(|summary| summary.error.is_some()) {
        return Err("one or more records failed to resolve".to_string());
    }
    Ok(())
}
