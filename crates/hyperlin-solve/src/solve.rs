//! # Hyper-Linear Solver
//!
//! Finds every vector X over the universe K such that `B ⊆ A ⊙ X`, i.e. for
//! each row i the target `B[i]` is one of the possible values of
//!
//! ```text
//! (A[i][0] ⊙ X[0]) ⊕ (A[i][1] ⊙ X[1]) ⊕ … ⊕ (A[i][n-1] ⊙ X[n-1])
//! ```
//!
//! Because ⊕ is multi-valued, the running sum of a row is a set. It is
//! accumulated as a left fold over the columns: the first product seeds the
//! set, and every later product is combined with it through
//! [`Hyperfield::hyper_add_sets`]. Hyperaddition need not be associative for
//! arbitrary tables, so the fold order is part of the contract.
//!
//! ## Complexity
//!
//! Search is exhaustive over K^n_cols. One solve costs
//! `O(|K|^n_cols · n_rows · n_cols · s²)` table lookups, where `s` bounds the
//! size of an intermediate row set (at most |K|). Use a [`Budget`] to refuse
//! oversized systems up front.

use hyperlin_core::{Element, ElementSet, HyperError, Hyperfield, Matrix, Resource};

use crate::budget::{candidate_count, Budget};
use crate::odometer::Odometer;

/// Lazy iterator over K^n in K's declared order, last coordinate fastest.
#[derive(Debug, Clone)]
pub struct Candidates<'a, E> {
    elements: &'a [E],
    digits: Odometer,
}

impl<'a, E: Element> Candidates<'a, E> {
    /// Enumerate every vector of length `len` over `elements`.
    pub fn new(elements: &'a [E], len: usize) -> Self {
        Self {
            elements,
            digits: Odometer::new(vec![elements.len(); len]),
        }
    }
}

impl<E: Element> Iterator for Candidates<'_, E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Vec<E>> {
        let digits = self.digits.next()?;
        Some(digits.into_iter().map(|d| self.elements[d].clone()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.digits.size_hint()
    }
}

/// The set of values row `row` can take against candidate `x`.
///
/// A row with no columns has no seed for the fold and yields the empty set.
pub fn row_product_set<E: Element>(
    field: &Hyperfield<E>,
    row: &[E],
    x: &[E],
) -> Result<ElementSet<E>, HyperError> {
    if row.len() != x.len() {
        return Err(HyperError::shape(format!(
            "row has {} coefficients but the candidate has {} entries",
            row.len(),
            x.len()
        )));
    }
    fold_row(field, row, x)
}

fn fold_row<E: Element>(
    field: &Hyperfield<E>,
    row: &[E],
    x: &[E],
) -> Result<ElementSet<E>, HyperError> {
    row.iter()
        .zip(x)
        .map(|(a, xj)| field.mul(a, xj).map(|p| ElementSet::singleton(p.clone())))
        .try_fold(None, |possible: Option<ElementSet<E>>, term| {
            let term = term?;
            Ok::<_, HyperError>(Some(match possible {
                None => term,
                Some(possible) => field.hyper_add_sets(&possible, &term)?,
            }))
        })
        .map(Option::unwrap_or_default)
}

/// Whether `b ⊆ a ⊙ x` holds row by row.
///
/// Rows are checked top to bottom and the first miss ends the check, so a
/// table gap in a later row only surfaces when earlier rows pass.
pub fn satisfies<E: Element>(
    field: &Hyperfield<E>,
    a: &Matrix<E>,
    b: &[E],
    x: &[E],
) -> Result<bool, HyperError> {
    check_target(a, b)?;
    if x.len() != a.cols() {
        return Err(HyperError::shape(format!(
            "candidate has {} entries, matrix has {} columns",
            x.len(),
            a.cols()
        )));
    }
    accepts(field, a, b, x)
}

fn accepts<E: Element>(
    field: &Hyperfield<E>,
    a: &Matrix<E>,
    b: &[E],
    x: &[E],
) -> Result<bool, HyperError> {
    for (row, target) in a.iter_rows().zip(b) {
        if !fold_row(field, row, x)?.contains(target) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn check_target<E>(a: &Matrix<E>, b: &[E]) -> Result<(), HyperError> {
    if b.len() != a.rows() {
        return Err(HyperError::shape(format!(
            "target has {} entries, matrix has {} rows",
            b.len(),
            a.rows()
        )));
    }
    Ok(())
}

/// Every X in K^n_cols with `b ⊆ a ⊙ x`, in candidate order.
///
/// Visits all |K|^n_cols candidates; see the module docs for the full cost.
/// An empty result is a valid answer. With K empty and at least one column
/// there are no candidates at all; with no rows every candidate passes.
pub fn solve<E: Element>(
    field: &Hyperfield<E>,
    a: &Matrix<E>,
    b: &[E],
) -> Result<Vec<Vec<E>>, HyperError> {
    solve_with(field, a, b, &Budget::unlimited())
}

/// [`solve`] with the candidate count checked against `budget` first.
pub fn solve_with<E: Element>(
    field: &Hyperfield<E>,
    a: &Matrix<E>,
    b: &[E],
    budget: &Budget,
) -> Result<Vec<Vec<E>>, HyperError> {
    check_target(a, b)?;
    let count = candidate_count(field.order(), a.cols());
    budget.check(Resource::Candidates, count)?;
    tracing::trace!(
        rows = a.rows(),
        cols = a.cols(),
        candidates = ?count,
        "solving hyper-linear system"
    );
    solve_unchecked(field, a, b)
}

/// Enumeration loop without shape or budget checks.
pub(crate) fn solve_unchecked<E: Element>(
    field: &Hyperfield<E>,
    a: &Matrix<E>,
    b: &[E],
) -> Result<Vec<Vec<E>>, HyperError> {
    let mut solutions = Vec::new();
    for x in Candidates::new(field.elements(), a.cols()) {
        if accepts(field, a, b, &x)? {
            solutions.push(x);
        }
    }
    Ok(solutions)
}
