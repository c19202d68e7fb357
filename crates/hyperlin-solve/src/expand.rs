//! # Matrix Expander
//!
//! Turns an ambiguous matrix (a candidate set per cell) into every concrete
//! matrix obtained by picking one element per cell.
//!
//! Cells are taken row-major, so flat cell `k` is row `k / n_cols`, column
//! `k % n_cols`, and the expansion is the cartesian product of the
//! flattened cell sets with the last cell varying fastest. Within a cell,
//! candidates are tried in the set's insertion order.
//!
//! ```text
//! [{1,2}, {0}]   →   [1, 0], [2, 0]
//! ```
//!
//! An ambiguous matrix with zero rows expands to exactly one `0 × 0`
//! matrix; a matrix with an empty cell expands to nothing.

use hyperlin_core::{Element, ElementSet, HyperError, Matrix, Resource};

use crate::budget::{expansion_count, Budget};
use crate::odometer::Odometer;

/// Lazy iterator over the concrete matrices of an ambiguous matrix.
#[derive(Debug, Clone)]
pub struct Expansions<'a, E> {
    source: &'a Matrix<ElementSet<E>>,
    picks: Odometer,
}

impl<'a, E: Element> Expansions<'a, E> {
    /// Start enumerating the expansions of `source`.
    pub fn new(source: &'a Matrix<ElementSet<E>>) -> Self {
        let radices = source.cells().iter().map(ElementSet::len).collect();
        Self {
            source,
            picks: Odometer::new(radices),
        }
    }
}

impl<E: Element> Iterator for Expansions<'_, E> {
    type Item = Matrix<E>;

    fn next(&mut self) -> Option<Matrix<E>> {
        let picks = self.picks.next()?;
        let mut k = 0;
        Some(self.source.map(|cell| {
            let chosen = cell.as_slice()[picks[k]].clone();
            k += 1;
            chosen
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.picks.size_hint()
    }
}

/// Every concrete matrix consistent with `matrix`, in odometer order.
///
/// The result has exactly [`expansion_count`] entries.
pub fn expand<E: Element>(matrix: &Matrix<ElementSet<E>>) -> Vec<Matrix<E>> {
    Expansions::new(matrix).collect()
}

/// [`expand`] with the expansion count checked against `budget` first.
pub fn expand_with<E: Element>(
    matrix: &Matrix<ElementSet<E>>,
    budget: &Budget,
) -> Result<Vec<Matrix<E>>, HyperError> {
    let count = expansion_count(matrix);
    budget.check(Resource::Expansions, count)?;
    tracing::debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        expansions = ?count,
        "expanding ambiguous matrix"
    );
    Ok(expand(matrix))
}
