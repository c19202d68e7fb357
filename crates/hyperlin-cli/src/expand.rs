//! # Expand Subcommand
//!
//! Reports how many concrete matrices an ambiguous matrix stands for and,
//! with `--list`, prints them in expansion order.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hyperlin_solve::{expand_with, expansion_count};

use crate::config::{BudgetArgs, SolverConfig};
use crate::problem;
use crate::render::{write_expansions, OutputFormat};

/// Arguments for the `hyperlin expand` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ExpandArgs {
    /// Path to a YAML or JSON problem file.
    #[arg(value_name = "PROBLEM")]
    pub problem: PathBuf,

    /// Print every concrete matrix, not just the count.
    #[arg(long)]
    pub list: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the expand subcommand. Returns the process exit code.
pub fn run_expand(args: &ExpandArgs, config: &SolverConfig, out: &mut dyn Write) -> Result<u8> {
    let problem = problem::load(&args.problem)?;
    let budget = config.clone().with_overrides(&args.budget).budget();

    if args.list {
        let matrices = expand_with(&problem.matrix, &budget)?;
        write_expansions(out, matrices.len(), Some(matrices.as_slice()), args.format)?;
    } else {
        // Counting alone never enumerates, so only the overflow case fails.
        let count = expansion_count(&problem.matrix)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| anyhow::anyhow!("expansion count does not fit in usize"))?;
        write_expansions::<problem::Symbol, _>(out, count, None, args.format)?;
    }
    Ok(0)
}
