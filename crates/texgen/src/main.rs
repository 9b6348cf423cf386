//! Texgen - Vendor atom binding generator
//!
//! Compiles the declarative atom schema and emits per-language constant
//! bindings. Any error aborts the run without leaving a partial set of
//! output files behind.
//!
//! # Usage
//!
//! ```bash
//! # Rust bindings only
//! texgen --schema atoms.toml --rust vendor_atoms.rs
//!
//! # All targets at once
//! texgen --schema atoms.toml \
//!     --rust vendor_atoms.rs \
//!     --cpp-header vendor_atoms.h --namespaces android,vendoratoms \
//!     --java VendorAtomsLog.java \
//!     --java-package com.android.host.statslogapigen \
//!     --java-class VendorAtomsLog
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tex_codegen::{BindingWriter, CppHeaderWriter, JavaWriter, RustWriter, write_sources};
use tex_schema::SchemaModel;

/// Texgen - Vendor atom binding generator
#[derive(Parser, Debug)]
#[command(name = "texgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the atom schema file
    #[arg(long)]
    schema: PathBuf,

    /// Path for generated Rust bindings
    #[arg(long)]
    rust: Option<PathBuf>,

    /// Path for the generated C++ header
    #[arg(long)]
    cpp_header: Option<PathBuf>,

    /// Comma-separated C++ namespace spec
    #[arg(long, default_value = "android,vendoratoms")]
    namespaces: String,

    /// Path for the generated Java class file
    #[arg(long)]
    java: Option<PathBuf>,

    /// Package of the generated Java class
    #[arg(long)]
    java_package: Option<String>,

    /// Name of the generated Java class
    #[arg(long)]
    java_class: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let outputs = collect_outputs(&cli)?;
    if outputs.is_empty() {
        bail!("no output requested: pass at least one of --rust, --cpp-header, --java");
    }

    let model = SchemaModel::from_file(&cli.schema)
        .with_context(|| format!("failed to compile schema '{}'", cli.schema.display()))?;
    info!(
        schema = %cli.schema.display(),
        atoms = model.len(),
        "schema compiled"
    );

    // render everything before writing anything, so neither a schema
    // problem nor a failed write leaves a partial set of outputs behind
    let targets: Vec<_> = outputs
        .iter()
        .map(|(writer, path)| (writer.as_ref(), path.as_path()))
        .collect();
    write_sources(&targets, &model).context("failed to emit bindings")?;
    info!(outputs = outputs.len(), "generation complete");

    Ok(())
}

type Output = (Box<dyn BindingWriter>, PathBuf);

fn collect_outputs(cli: &Cli) -> Result<Vec<Output>> {
    let mut outputs: Vec<Output> = Vec::new();

    if let Some(path) = &cli.rust {
        outputs.push((Box::new(RustWriter::new()), path.clone()));
    }
    if let Some(path) = &cli.cpp_header {
        outputs.push((Box::new(CppHeaderWriter::new(&cli.namespaces)), path.clone()));
    }
    if let Some(path) = &cli.java {
        let package = cli
            .java_package
            .as_deref()
            .context("--java requires --java-package")?;
        let class = cli
            .java_class
            .as_deref()
            .context("--java requires --java-class")?;
        outputs.push((Box::new(JavaWriter::new(package, class)), path.clone()));
    }

    Ok(outputs)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
