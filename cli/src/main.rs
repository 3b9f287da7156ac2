#![deny(missing_docs)]

//! # Swagger Models CLI
//!
//! Command Line Interface for generating pydantic models from OpenAPI schemas.
//!
//! Supported Commands:
//! - `generate`: OpenAPI document -> `BasicModels.py` + `ComplexModels.py`.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod error;
mod generate;
mod writer;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI -> pydantic model generator")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Basic and Complex model modules from a schema document.
    Generate(generate::GenerateArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info,swagger_models_core=info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Generate(args) => generate::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "generation aborted");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
