//! Extension specification validator CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use extspec::models::Severity;
use extspec::parser::{find_specification, parse_specification_from_file};
use extspec::report::{format_message, generate_json_report, generate_summary};
use extspec::{resolve_build_directory, SpecificationValidator};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "extspec")]
#[command(about = "Validate browser extension specifications before packaging", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every problem in the specification
    Validate {
        /// Use the specified spec file instead of Extspec.json5
        #[arg(long)]
        spec: Option<PathBuf>,

        /// The directory containing the built extension
        #[arg(short = 'b', long, default_value = "build")]
        built_directory: PathBuf,

        /// Skip checking that referenced files exist
        #[arg(long)]
        no_build_check: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stop at the first fatal problem
    Check {
        /// Use the specified spec file instead of Extspec.json5
        #[arg(long)]
        spec: Option<PathBuf>,

        /// The directory containing the built extension
        #[arg(short = 'b', long, default_value = "build")]
        built_directory: PathBuf,

        /// Skip checking that referenced files exist
        #[arg(long)]
        no_build_check: bool,
    },
}

fn spec_path(spec: Option<PathBuf>) -> Result<PathBuf> {
    match spec {
        Some(path) => Ok(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(find_specification(&cwd)?)
        }
    }
}

fn build_dir(spec_path: &Path, built_directory: &Path, skip: bool) -> Option<PathBuf> {
    (!skip).then(|| resolve_build_directory(spec_path, built_directory))
}

fn print_message(severity: Severity, message: &str) {
    let line = format_message(severity, message);
    match severity {
        Severity::Warn => println!("{}", line.yellow()),
        Severity::Fatal => println!("{}", line.red()),
    }
}

/// Returns whether any fatal was recorded.
fn run_validate(
    spec: Option<PathBuf>,
    built_directory: PathBuf,
    no_build_check: bool,
    json: bool,
) -> Result<bool> {
    let path = spec_path(spec)?;
    let specification = parse_specification_from_file(&path)?;
    let out = build_dir(&path, &built_directory, no_build_check);

    let mut validator = SpecificationValidator::new(&specification, out.as_deref());
    if !json {
        validator = validator.on_message(print_message);
    }

    let all_ok = validator.validate()?;

    if json {
        println!("{}", generate_json_report(&validator)?);
    } else if all_ok {
        println!("{}", generate_summary(&validator).green());
    } else {
        println!("{}", generate_summary(&validator).bold());
    }

    Ok(!validator.errors().is_empty())
}

fn run_check(
    spec: Option<PathBuf>,
    built_directory: PathBuf,
    no_build_check: bool,
) -> Result<bool> {
    let path = spec_path(spec)?;
    let specification = parse_specification_from_file(&path)?;
    let out = build_dir(&path, &built_directory, no_build_check);

    let result = SpecificationValidator::new(&specification, out.as_deref())
        .violent(true)
        .on_message(print_message)
        .validate();

    match result {
        Ok(true) => {
            println!("{}", "All OK!".green());
            Ok(false)
        }
        Ok(false) => Ok(false),
        Err(e) if e.is_invalid_specification() => Ok(true),
        Err(e) => Err(e.into()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate { spec, built_directory, no_build_check, json } => {
            run_validate(spec, built_directory, no_build_check, json)
        }
        Commands::Check { spec, built_directory, no_build_check } => {
            run_check(spec, built_directory, no_build_check)
        }
    };

    match outcome {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", "❌ Validation failed!".red().bold());
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}
