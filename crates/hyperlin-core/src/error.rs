//! # Error Hierarchy
//!
//! Structured error types for hyperlin, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Element values are generic, so variants carry operands already rendered
//! through `Debug`. That keeps the error type free of a type parameter and
//! lets it cross crate boundaries unchanged.

use thiserror::Error;

/// Top-level error type for hyperlin.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HyperError {
    /// A matrix is ragged, or a vector length disagrees with the matrix.
    #[error("invalid shape: {reason}")]
    InvalidShape {
        /// What disagreed with what.
        reason: String,
    },

    /// A table lookup found no entry for the pair.
    #[error("undefined operation {op} for pair ({left}, {right})")]
    UndefinedOperation {
        /// Which table was consulted.
        op: Operation,
        /// Left operand, `Debug`-rendered.
        left: String,
        /// Right operand, `Debug`-rendered.
        right: String,
    },

    /// The element universe lists the same element twice.
    #[error("duplicate element {0} in hyperfield universe")]
    DuplicateElement(String),

    /// A table entry mentions an element outside the universe.
    #[error("element {0} is not part of the hyperfield universe")]
    UnknownElement(String),

    /// A hyperaddition entry maps a pair to the empty set.
    #[error("hyperaddition of ({left}, {right}) must yield a non-empty set")]
    EmptySum {
        /// Left operand, `Debug`-rendered.
        left: String,
        /// Right operand, `Debug`-rendered.
        right: String,
    },

    /// An enumeration would exceed its configured budget.
    #[error("{resource} budget exceeded: {required} required, limit is {limit}")]
    ResourceExceeded {
        /// Which enumeration hit the limit.
        resource: Resource,
        /// Exact size of the enumeration, or `overflow` when it does not fit in u128.
        required: String,
        /// The configured limit.
        limit: u128,
    },
}

/// The two hyperfield operation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Hyperaddition ⊕ (pair → set).
    HyperAdd,
    /// Multiplication ⊙ (pair → element).
    Mul,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HyperAdd => write!(f, "hyperaddition"),
            Self::Mul => write!(f, "multiplication"),
        }
    }
}

/// Enumerations guarded by a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Concrete matrices produced from an ambiguous matrix.
    Expansions,
    /// Candidate vectors enumerated for one concrete matrix.
    Candidates,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expansions => write!(f, "expansion"),
            Self::Candidates => write!(f, "candidate"),
        }
    }
}

impl HyperError {
    /// Build an `UndefinedOperation` from typed operands.
    pub fn undefined<E: std::fmt::Debug>(op: Operation, left: &E, right: &E) -> Self {
        Self::UndefinedOperation {
            op,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }

    /// Build an `InvalidShape` from a reason.
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}
