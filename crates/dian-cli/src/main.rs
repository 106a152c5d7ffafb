//! # dian CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dian_cli::dv::{run_dv, DvArgs};
use dian_cli::fields::{run_fields, FieldsArgs};
use dian_cli::validate::{run_validate, ValidateArgs};

/// Checkout document toolchain for Colombian storefronts.
///
/// Computes DIAN check digits, validates checkout document pairs, and
/// exports the checkout field configuration.
#[derive(Parser, Debug)]
#[command(name = "dian", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the DIAN check digit for a NIT base number.
    Dv(DvArgs),

    /// Validate one checkout document pair (type plus number).
    Validate(ValidateArgs),

    /// Export the checkout field configuration as JSON.
    Fields(FieldsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Dv(args) => run_dv(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Fields(args) => run_fields(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
