//! # Rectangular Matrices
//!
//! [`Matrix`] stores cells row-major in one flat buffer, so flat index `k`
//! sits at row `k / cols`, column `k % cols`. Shape is validated once at
//! construction; a ragged matrix cannot be represented.
//!
//! The same type serves both matrix kinds:
//!
//! - a concrete matrix is `Matrix<E>`, one element per cell;
//! - an ambiguous matrix is `Matrix<ElementSet<E>>`, one candidate set per cell.
//!
//! ## Degenerate Shapes
//!
//! A matrix built from zero rows has zero columns. A `0 × c` matrix can only
//! be built with [`Matrix::empty`] or [`Matrix::from_flat`]; the solver uses
//! that shape for the vacuous "no equations" system.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HyperError;

/// A rectangular, immutable, row-major matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// Zero rows yield a `0 × 0` matrix. Every row must have the length of
    /// the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, HyperError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(HyperError::shape(format!(
                    "row {i} has {} cells, expected {n_cols}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Build a matrix from a row-major flat buffer.
    pub fn from_flat(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, HyperError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| HyperError::shape(format!("{rows} x {cols} overflows usize")))?;
        if cells.len() != expected {
            return Err(HyperError::shape(format!(
                "{} cells cannot fill a {rows} x {cols} matrix",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from parts already known to agree.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// A matrix with no rows and `cols` columns.
    pub fn empty(cols: usize) -> Self {
        Self {
            rows: 0,
            cols,
            cells: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The cell at `(i, j)`, if in bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Nested-row copy of the matrix.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(de::Error::custom)
    }
}
