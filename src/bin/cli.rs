// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stairframe CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stairframe::cli::Reporter;
use stairframe::{validate, GeneratorConfig, MaterialPalette, StairGenerator, StaircaseSpec};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stairframe")]
#[command(about = "Stairframe - parametric staircase solid-model generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Generator constants (TOML); defaults to ./stairframe.toml when present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the geometry model for a staircase spec
    Generate {
        /// Input spec (JSON)
        input: String,

        /// Output JSON file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Material appearance overrides (TOML or JSON)
        #[arg(short, long, value_name = "FILE")]
        palette: Option<String>,
    },

    /// Check a spec against the dimensional rules
    Validate {
        /// Input spec (JSON)
        input: String,
    },

    /// Generate and print a summary with quantities
    Summary {
        /// Input spec (JSON)
        input: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate {
            input,
            output,
            palette,
        } => generate_command(&cli, input, output.as_deref(), palette.as_deref())?,
        Commands::Validate { input } => validate_command(input)?,
        Commands::Summary { input } => summary_command(&cli, input)?,
        Commands::Version => {
            println!("Stairframe v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stairframe=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    match &cli.config {
        Some(path) => GeneratorConfig::from_file(path),
        None => GeneratorConfig::load(),
    }
}

fn load_spec(input: &str) -> Result<StaircaseSpec> {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read spec file: {}", input))?;
    match StaircaseSpec::from_json(&source) {
        Ok(spec) => Ok(spec),
        Err(err) => {
            Reporter::report_rejection(input, &err);
            std::process::exit(1);
        }
    }
}

fn generate_command(
    cli: &Cli,
    input: &str,
    output: Option<&str>,
    palette: Option<&str>,
) -> Result<()> {
    let spec = load_spec(input)?;
    let mut generator = StairGenerator::with_config(load_config(cli)?);
    if let Some(path) = palette {
        generator = generator.palette(MaterialPalette::from_file(path)?);
    }

    let start = std::time::Instant::now();
    let model = match generator.generate(&spec) {
        Ok(model) => model,
        Err(err) => {
            Reporter::report_rejection(input, &err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Generated {} elements in {:.2?}", model.len(), start.elapsed());
    }

    let json = model.to_json().context("Failed to serialize model")?;
    if let Some(output_path) = output {
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write model: {}", output_path))?;
        if cli.verbose {
            eprintln!("Model written to: {}", output_path);
        }
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn validate_command(input: &str) -> Result<()> {
    let spec = load_spec(input)?;

    match validate(&spec) {
        Ok(_) => Reporter::report_accepted(input),
        Err(errors) => {
            Reporter::report_rejection(input, &errors.into());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn summary_command(cli: &Cli, input: &str) -> Result<()> {
    let spec = load_spec(input)?;
    let generator = StairGenerator::with_config(load_config(cli)?);

    match generator.generate(&spec) {
        Ok(model) => Reporter::report_model(input, &spec, &model),
        Err(err) => {
            Reporter::report_rejection(input, &err);
            std::process::exit(1);
        }
    }

    Ok(())
}
