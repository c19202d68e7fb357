//! # hyperlin-core — Foundational Types for Hyperfield Linear Algebra
//!
//! A hyperfield generalises a field by letting addition return a *set* of
//! possible results. This crate holds the data every other hyperlin crate
//! works over; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Elements and element sets are distinct types.** A bare `E` is a
//!    single value (a product, a concrete matrix cell); an
//!    [`ElementSet<E>`] is multi-valued (a hyperaddition result, an
//!    ambiguous cell, a row-product set).
//!
//! 2. **Generic over the element type.** Any `Clone + Eq + Hash + Debug`
//!    type is an [`Element`]. Nothing numeric is assumed.
//!
//! 3. **Shape is validated once.** [`Matrix`] cannot be ragged.
//!
//! 4. **Missing table entries fail loudly.** A lookup of an unset pair is
//!    [`HyperError::UndefinedOperation`], never an empty answer.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hyperlin-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod element;
pub mod error;
pub mod hyperfield;
pub mod matrix;
pub mod presets;

// Re-export primary types for ergonomic imports.
pub use element::{Element, ElementSet};
pub use error::{HyperError, Operation, Resource};
pub use hyperfield::Hyperfield;
pub use matrix::Matrix;
