//! # Family Solving
//!
//! Solves `B ⊆ A ⊙ X` for every concrete matrix A of an ambiguous matrix:
//! expand first, then run one independent solve per concrete matrix.
//!
//! Per-matrix solves share nothing, so they can run on a rayon pool. Results
//! come back in expansion order either way; parallel and sequential runs
//! return identical vectors.
//!
//! Shape and both budgets are checked before anything is enumerated. Every
//! concrete matrix has the ambiguous matrix's column count, so one candidate
//! check covers the whole family.

use rayon::prelude::*;
use serde::Serialize;

use hyperlin_core::{Element, ElementSet, HyperError, Hyperfield, Matrix, Resource};

use crate::budget::{candidate_count, expansion_count, Budget};
use crate::expand::Expansions;
use crate::solve::solve_unchecked;

/// How a family is solved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Enumeration limits.
    pub budget: Budget,
    /// Solve concrete matrices on the rayon thread pool.
    pub parallel: bool,
}

/// Solutions for one concrete matrix of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixSolutions<E> {
    /// Position of the matrix in expansion order.
    pub index: usize,
    /// The concrete coefficient matrix.
    pub matrix: Matrix<E>,
    /// Every X with `B ⊆ matrix ⊙ X`, in candidate order.
    pub solutions: Vec<Vec<E>>,
}

/// Aggregate counts over a solved family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    /// Number of concrete matrices.
    pub matrices: usize,
    /// Concrete matrices with at least one solution.
    pub solvable: usize,
    /// Total solutions across all matrices.
    pub solutions: usize,
}

impl FamilySummary {
    /// Tally a family result.
    pub fn of<E>(results: &[MatrixSolutions<E>]) -> Self {
        results.iter().fold(Self::default(), |acc, r| Self {
            matrices: acc.matrices + 1,
            solvable: acc.solvable + usize::from(!r.solutions.is_empty()),
            solutions: acc.solutions + r.solutions.len(),
        })
    }
}

/// Solve `target ⊆ A ⊙ X` for every concrete A expanded from `ambiguous`.
///
/// The first failing solve aborts the family with its error.
pub fn solve_family<E>(
    field: &Hyperfield<E>,
    ambiguous: &Matrix<ElementSet<E>>,
    target: &[E],
    options: &SolveOptions,
) -> Result<Vec<MatrixSolutions<E>>, HyperError>
where
    E: Element + Send + Sync,
{
    if target.len() != ambiguous.rows() {
        return Err(HyperError::shape(format!(
            "target has {} entries, matrix has {} rows",
            target.len(),
            ambiguous.rows()
        )));
    }
    let expansions = expansion_count(ambiguous);
    options.budget.check(Resource::Expansions, expansions)?;
    let candidates = candidate_count(field.order(), ambiguous.cols());
    options.budget.check(Resource::Candidates, candidates)?;

    tracing::debug!(
        expansions = ?expansions,
        candidates_per_matrix = ?candidates,
        parallel = options.parallel,
        "solving matrix family"
    );

    let solve_one = |(index, matrix): (usize, Matrix<E>)| -> Result<MatrixSolutions<E>, HyperError> {
        let solutions = solve_unchecked(field, &matrix, target)?;
        tracing::trace!(index, solutions = solutions.len(), "solved concrete matrix");
        Ok(MatrixSolutions {
            index,
            matrix,
            solutions,
        })
    };

    let matrices = Expansions::new(ambiguous).enumerate();
    let results: Result<Vec<_>, HyperError> = if options.parallel {
        matrices
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(solve_one)
            .collect()
    } else {
        matrices.map(solve_one).collect()
    };

    if let Ok(ref results) = results {
        let summary = FamilySummary::of(results);
        tracing::debug!(
            matrices = summary.matrices,
            solvable = summary.solvable,
            solutions = summary.solutions,
            "matrix family solved"
        );
    }
    results
}
