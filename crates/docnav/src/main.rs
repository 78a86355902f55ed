//! docnav CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `check`: Validate the navigation configuration
//! - `resolve`: Show the active navbar entry and open sidebar sections for a path
//! - `export`: Print the resolved navigation as JSON for the site renderer

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ResolveArgs};
use output::Output;

/// docnav - Navbar and sidebar resolution for documentation sites.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, global = true, env = "DOCNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the navigation configuration.
    Check(CheckArgs),
    /// Show which entries are active for a page path.
    Resolve(ResolveArgs),
    /// Print the resolved navigation as JSON.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Check(args) => args.execute(config),
        Commands::Resolve(args) => args.execute(config),
        Commands::Export(args) => args.execute(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
