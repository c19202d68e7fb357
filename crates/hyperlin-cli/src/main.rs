//! # hyperlin CLI entry point
//!
//! Parses command-line arguments, sets up logging, resolves the solver
//! configuration, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hyperlin_cli::demo::{run_demo, DemoArgs};
use hyperlin_cli::expand::{run_expand, ExpandArgs};
use hyperlin_cli::solve::{run_solve, SolveArgs};
use hyperlin_cli::SolverConfig;

/// Linear systems over hyperfields.
///
/// Enumerates every X with B ⊆ A⊙X, where the coefficient matrix A may list
/// several candidate elements per cell.
#[derive(Parser, Debug)]
#[command(name = "hyperlin", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML solver configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a problem file.
    Solve(SolveArgs),

    /// Expand the ambiguous coefficient matrix of a problem file.
    Expand(ExpandArgs),

    /// Solve the built-in sign-hyperfield example.
    Demo(DemoArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let logger = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logger.json().init();
    } else {
        logger.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hyperlin starting");

    let config = match SolverConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Solve(args) => run_solve(&args, &config, &mut stdout),
        Commands::Expand(args) => run_expand(&args, &config, &mut stdout),
        Commands::Demo(args) => run_demo(&args, &config, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
