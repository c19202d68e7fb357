//! # Problem Files
//!
//! A problem file describes one hyperfield and one (possibly ambiguous)
//! linear system. It is YAML; since YAML is a superset of JSON, JSON files
//! load through the same parser.
//!
//! ```yaml
//! elements: [0, 1, 2]
//! add:
//!   - { left: 1, right: 2, sum: [0, 1, 2] }
//!   # … one entry per ordered pair
//! mul:
//!   - { left: 2, right: 2, product: 1 }
//!   # …
//! matrix:
//!   - [[1, 2], 0]        # a cell is one element or a list of candidates
//!   - [0, [1, 2]]
//! target: [1, 2]
//! ```
//!
//! Elements are integers or strings and may be mixed.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hyperlin_core::{ElementSet, HyperError, Hyperfield, Matrix};

/// A problem-file element: an integer or a name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    /// Integer element, e.g. `2`.
    Int(i64),
    /// Named element, e.g. `"minus"`.
    Name(String),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Name(s) => write!(f, "{s}"),
        }
    }
}

// Debug output appears in error messages, so keep it as terse as the file.
impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Name(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Symbol {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

/// A matrix cell as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSpec {
    /// A fixed coefficient.
    One(Symbol),
    /// Candidate coefficients.
    Many(Vec<Symbol>),
}

impl CellSpec {
    fn into_set(self) -> ElementSet<Symbol> {
        match self {
            Self::One(s) => ElementSet::singleton(s),
            Self::Many(v) => v.into(),
        }
    }
}

/// One hyperaddition table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SumEntry {
    /// Left operand.
    pub left: Symbol,
    /// Right operand.
    pub right: Symbol,
    /// Possible sums.
    pub sum: Vec<Symbol>,
}

/// One multiplication table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductEntry {
    /// Left operand.
    pub left: Symbol,
    /// Right operand.
    pub right: Symbol,
    /// The product.
    pub product: Symbol,
}

/// Raw problem file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    /// The universe K, in enumeration order.
    pub elements: Vec<Symbol>,
    /// Hyperaddition entries.
    #[serde(default)]
    pub add: Vec<SumEntry>,
    /// Multiplication entries.
    #[serde(default)]
    pub mul: Vec<ProductEntry>,
    /// Coefficient matrix rows.
    pub matrix: Vec<Vec<CellSpec>>,
    /// Target vector.
    pub target: Vec<Symbol>,
}

/// A validated problem ready for solving.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Hyperfield tables.
    pub field: Hyperfield<Symbol>,
    /// Ambiguous coefficient matrix (fixed cells are singletons).
    pub matrix: Matrix<ElementSet<Symbol>>,
    /// Target vector.
    pub target: Vec<Symbol>,
}

impl ProblemFile {
    /// Parse from YAML or JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("failed to parse problem file")
    }

    /// Build the hyperfield and matrix, rejecting malformed tables.
    pub fn into_problem(self) -> Result<Problem, HyperError> {
        let field = Hyperfield::from_tables(
            self.elements,
            self.add
                .into_iter()
                .map(|e| ((e.left, e.right), ElementSet::from(e.sum))),
            self.mul
                .into_iter()
                .map(|e| ((e.left, e.right), e.product)),
        )?;
        let matrix = Matrix::from_rows(
            self.matrix
                .into_iter()
                .map(|row| row.into_iter().map(CellSpec::into_set).collect())
                .collect(),
        )?;
        Ok(Problem {
            field,
            matrix,
            target: self.target,
        })
    }
}

/// Read, parse, and validate a problem file.
pub fn load(path: &Path) -> Result<Problem> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read problem file: {}", path.display()))?;
    let problem = ProblemFile::parse(&text)
        .and_then(|file| file.into_problem().map_err(anyhow::Error::from))
        .with_context(|| format!("invalid problem file: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        elements = problem.field.order(),
        rows = problem.matrix.rows(),
        cols = problem.matrix.cols(),
        "loaded problem"
    );
    Ok(problem)
}

/// Log every table gap. Returns how many there were.
pub fn report_missing_pairs(field: &Hyperfield<Symbol>) -> usize {
    let gaps = field.missing_pairs();
    for (op, left, right) in &gaps {
        tracing::warn!(%op, %left, %right, "operation table has no entry for pair");
    }
    gaps.len()
}
