//! # hyperlin-cli — Command-Line Front End
//!
//! Provides the `hyperlin` binary on top of `hyperlin-core` and
//! `hyperlin-solve`.
//!
//! ## Subcommands
//!
//! - `hyperlin solve <PROBLEM>`: solve every concrete matrix of a problem
//!   file against its target.
//! - `hyperlin expand <PROBLEM>`: count (or `--list`) the concrete matrices
//!   of an ambiguous coefficient matrix.
//! - `hyperlin demo`: the built-in sign-hyperfield example.
//!
//! ```bash
//! hyperlin demo --parallel
//! hyperlin solve problem.yaml --format json
//! hyperlin --config solver.yaml expand problem.yaml --list
//! ```
//!
//! Every handler takes its parsed arguments, the resolved [`SolverConfig`],
//! and an output sink, and returns the exit code. Logs go to stderr so that
//! stdout carries only results.

pub mod config;
pub mod demo;
pub mod expand;
pub mod problem;
pub mod render;
pub mod solve;

pub use config::SolverConfig;
