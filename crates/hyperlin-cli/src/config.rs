//! # Solver Configuration
//!
//! Enumeration limits and scheduling, read from an optional YAML file given
//! with `--config` and then overridden by command-line flags.
//!
//! ```yaml
//! max_expansions: 1000000    # null disables the limit
//! max_candidates: 10000000
//! parallel: false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use hyperlin_solve::{Budget, SolveOptions};

/// Default cap on concrete matrices per family.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Default cap on candidate vectors per solve.
pub const DEFAULT_MAX_CANDIDATES: u64 = 10_000_000;

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of concrete matrices, `None` for unbounded.
    pub max_expansions: Option<u64>,
    /// Maximum candidate vectors per solve, `None` for unbounded.
    pub max_candidates: Option<u64>,
    /// Solve concrete matrices in parallel.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            parallel: false,
        }
    }
}

/// Budget flags shared by the solving subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Maximum number of concrete matrices to expand.
    #[arg(long)]
    pub max_expansions: Option<u64>,

    /// Maximum number of candidate vectors per solve.
    #[arg(long)]
    pub max_candidates: Option<u64>,

    /// Remove both limits.
    #[arg(long, conflicts_with_all = ["max_expansions", "max_candidates"])]
    pub unbounded: bool,

    /// Solve concrete matrices on all cores.
    #[arg(long)]
    pub parallel: bool,
}

impl SolverConfig {
    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded solver config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, args: &BudgetArgs) -> Self {
        if args.unbounded {
            self.max_expansions = None;
            self.max_candidates = None;
        }
        if let Some(n) = args.max_expansions {
            self.max_expansions = Some(n);
        }
        if let Some(n) = args.max_candidates {
            self.max_candidates = Some(n);
        }
        self.parallel |= args.parallel;
        self
    }

    /// Enumeration limits.
    pub fn budget(&self) -> Budget {
        Budget {
            max_expansions: self.max_expansions,
            max_candidates: self.max_candidates,
        }
    }

    /// Options for family solving.
    pub fn options(&self) -> SolveOptions {
        SolveOptions {
            budget: self.budget(),
            parallel: self.parallel,
        }
    }
}
