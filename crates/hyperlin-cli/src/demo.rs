//! # Demo Subcommand
//!
//! Solves the built-in example: the sign hyperfield on {0, 1, 2}, the
//! ambiguous 3×3 matrix M with 768 concrete matrices, and B = [1, 2, 0].

use std::io::Write;

use anyhow::Result;
use clap::Args;

use hyperlin_core::presets;
use hyperlin_solve::solve_family;

use crate::config::{BudgetArgs, SolverConfig};
use crate::render::{write_family, OutputFormat};

/// Arguments for the `hyperlin demo` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DemoArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the demo subcommand. Returns the process exit code.
pub fn run_demo(args: &DemoArgs, config: &SolverConfig, out: &mut dyn Write) -> Result<u8> {
    let options = config.clone().with_overrides(&args.budget).options();
    let results = solve_family(
        &presets::sign(),
        &presets::example_matrix(),
        &presets::example_target(),
        &options,
    )?;
    write_family(out, &results, args.format)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prints_example_family() {
        let mut out = Vec::<u8>::new();
        let code = run_demo(&DemoArgs::default(), &SolverConfig::default(), &mut out).unwrap();
        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("matrix 0: [[1, 0, 0], [0, 1, 0], [0, 1, 1]]\n  (1, 2, 1)\n"));
        assert!(text.ends_with("768 matrices, 768 solvable, 3376 solutions\n"));
    }

    #[test]
    fn demo_respects_expansion_limit() {
        let args = DemoArgs {
            budget: BudgetArgs {
                max_expansions: Some(100),
                ..BudgetArgs::default()
            },
            ..DemoArgs::default()
        };
        let err = run_demo(&args, &SolverConfig::default(), &mut std::io::sink()).unwrap_err();
        assert!(err.to_string().contains("expansion budget exceeded"));
    }
}
