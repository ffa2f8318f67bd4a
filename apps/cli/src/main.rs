//! ferrum-r5 - structural validation for FHIR R5 resource documents

mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use commands::{StoreArgs, ValidateArgs};

#[derive(Debug, Parser)]
#[command(name = "ferrum-r5", version, about = "Validate FHIR R5 resources against their structural contracts")]
struct Cli {
    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate resource documents
    Validate(ValidateArgs),
    /// Print the snake_case document-store form of a resource
    Store(StoreArgs),
    /// List the supported resource types
    ResourceTypes,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.log_json).context("Failed to initialize logging")?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting ferrum-r5");

    match cli.command {
        Command::Validate(args) => {
            let all_valid = commands::validate(&args)?;
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Store(args) => {
            commands::store(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::ResourceTypes => {
            commands::resource_types();
            Ok(ExitCode::SUCCESS)
        }
    }
}
