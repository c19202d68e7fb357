//! # hyperlin-solve — Linear Systems over Hyperfields
//!
//! Exhaustive solving of `B ⊆ A ⊙ X` where A may be ambiguous (a candidate
//! set per cell):
//!
//! - **Expander** (`expand.rs`): every concrete matrix of an ambiguous one,
//!   by cartesian product over the row-major cells.
//!
//! - **Solver** (`solve.rs`): every X in K^n_cols whose row-product sets all
//!   contain the matching target entry. Row sums are a left fold of
//!   set-lifted hyperaddition.
//!
//! - **Budget** (`budget.rs`): exact enumeration sizes, checked before any
//!   work starts.
//!
//! - **Family** (`family.rs`): expand then solve each concrete matrix,
//!   optionally on a rayon pool, keeping expansion order.
//!
//! ## Mathematical Definition
//!
//! For a concrete A (m × n), target B ∈ K^m and candidate X ∈ K^n:
//!
//! ```text
//! (A ⊙ X)_i = ((A_i0 ⊙ X_0) ⊕ (A_i1 ⊙ X_1)) ⊕ … ⊕ (A_i,n-1 ⊙ X_n-1)
//! S(A, B)   = { X ∈ K^n : B_i ∈ (A ⊙ X)_i for all i }
//! ```
//!
//! No elimination or algebraic shortcut is attempted: the solver is brute
//! force by definition, which keeps it correct for tables that violate the
//! hyperfield axioms.

mod odometer;

pub mod budget;
pub mod expand;
pub mod family;
pub mod solve;

// Re-export primary types.
pub use budget::{candidate_count, expansion_count, Budget};
pub use expand::{expand, expand_with, Expansions};
pub use family::{solve_family, FamilySummary, MatrixSolutions, SolveOptions};
pub use solve::{row_product_set, satisfies, solve, solve_with, Candidates};
