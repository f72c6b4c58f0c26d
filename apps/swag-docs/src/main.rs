//! Swag documentation generator
//!
//! Builds the `OpenAPI` document of the demo API with the swag plugin applied
//! as configured.
//!
//! # Usage
//!
//! ```bash
//! # Print the document
//! swag-docs
//!
//! # Layered configuration, written to a file
//! SWAG__PLUGIN__ACCEPT_LANGUAGE=true swag-docs --config swag.yaml generate --output openapi.json
//!
//! # Validate configuration and generation without emitting the document
//! swag-docs -v check
//! ```

// CLI tools are expected to print to stdout
#![allow(clippy::print_stdout)]

mod demo;
mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swag_gen::{ApiExplorer, SwaggerGenOptions};
use swag_plugin::{SwagConfig, SwaggerGenOptionsExt};
use utoipa::openapi::{OpenApi, PathItem};

/// Swag documentation generator
#[derive(Parser)]
#[command(name = "swag-docs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the OpenAPI document (default)
    Generate {
        /// Write the document to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate configuration and generation, then exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML (if provided) -> env (SWAG__*)
    let config = SwagConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let explorer = demo::explorer();
    let mut options = SwaggerGenOptions::new(config.info.clone());
    options.register_swag_from_config(Arc::new(demo::annotations()), &config.plugin);

    match cli.command.unwrap_or(Commands::Generate { output: None }) {
        Commands::Generate { output } => generate(&explorer, &options, output.as_deref()),
        Commands::Check => check(&explorer, &options),
    }
}

fn generate(explorer: &ApiExplorer, options: &SwaggerGenOptions, output: Option<&Path>) -> Result<()> {
    let document = explorer.generate(options)?;
    let json = document
        .to_pretty_json()
        .context("failed to serialize OpenAPI document")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "OpenAPI document written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn check(explorer: &ApiExplorer, options: &SwaggerGenOptions) -> Result<()> {
    tracing::info!("Checking configuration...");
    let document = explorer.generate(options)?;

    println!("Configuration is valid");
    println!(
        "{} paths, {} operations, {} schemas, {} filters",
        document.paths.paths.len(),
        operation_count(&document),
        explorer.schema_repository().len(),
        options.filters().len()
    );
    Ok(())
}

fn operation_count(document: &OpenApi) -> usize {
    document.paths.paths.values().map(operations_in).sum()
}

fn operations_in(item: &PathItem) -> usize {
    [
        &item.get,
        &item.put,
        &item.post,
        &item.delete,
        &item.options,
        &item.head,
        &item.patch,
        &item.trace,
    ]
    .into_iter()
    .filter(|op| op.is_some())
    .count()
}
