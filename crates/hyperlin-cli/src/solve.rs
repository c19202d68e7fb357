//! # Solve Subcommand
//!
//! Loads a problem file and solves every concrete matrix of its (possibly
//! ambiguous) coefficient matrix against the target.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use hyperlin_solve::solve_family;

use crate::config::{BudgetArgs, SolverConfig};
use crate::problem;
use crate::render::{write_family, OutputFormat};

/// Arguments for the `hyperlin solve` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Path to a YAML or JSON problem file.
    #[arg(value_name = "PROBLEM")]
    pub problem: PathBuf,

    /// Fail when an operation table has gaps instead of warning.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the solve subcommand. Returns the process exit code.
pub fn run_solve(args: &SolveArgs, config: &SolverConfig, out: &mut dyn Write) -> Result<u8> {
    let problem = problem::load(&args.problem)?;
    let gaps = problem::report_missing_pairs(&problem.field);
    if args.strict && gaps > 0 {
        bail!("operation tables have {gaps} undefined pair(s)");
    }

    let options = config.clone().with_overrides(&args.budget).options();
    let results = solve_family(&problem.field, &problem.matrix, &problem.target, &options)?;
    write_family(out, &results, args.format)?;
    Ok(0)
}
