//! # Hyperfield Tables
//!
//! A [`Hyperfield`] bundles the ordered element universe K with its two
//! operation tables:
//!
//! ```text
//! ⊕ : K × K → P(K) \ {∅}    (hyperaddition, multi-valued)
//! ⊙ : K × K → K             (multiplication, single-valued)
//! ```
//!
//! Tables are stored densely, indexed by the position of each operand in K,
//! so a lookup hashes the borrowed operands once and never clones them.
//!
//! ## What Is Not Checked
//!
//! The hyperfield axioms (commutativity, associativity, neutral element,
//! absorbing zero, inverses) are the caller's responsibility. Totality is
//! not enforced either: a pair left unset surfaces as
//! [`HyperError::UndefinedOperation`] at the moment it is looked up.
//! [`Hyperfield::missing_pairs`] lists the gaps for callers that want to
//! fail early.

use std::collections::HashMap;

use crate::element::{Element, ElementSet};
use crate::error::{HyperError, Operation};

/// An element universe with hyperaddition and multiplication tables.
#[derive(Debug, Clone)]
pub struct Hyperfield<E> {
    elements: Vec<E>,
    index: HashMap<E, usize>,
    /// `sums[i * n + j]` is `elements[i] ⊕ elements[j]`.
    sums: Vec<Option<ElementSet<E>>>,
    /// `products[i * n + j]` is `elements[i] ⊙ elements[j]`.
    products: Vec<Option<E>>,
}

impl<E: Element> Hyperfield<E> {
    /// Create a hyperfield over `elements` with both tables empty.
    ///
    /// The order of `elements` is the enumeration order used by the solver.
    pub fn new(elements: Vec<E>) -> Result<Self, HyperError> {
        let mut index = HashMap::with_capacity(elements.len());
        for (i, e) in elements.iter().enumerate() {
            if index.insert(e.clone(), i).is_some() {
                return Err(HyperError::DuplicateElement(format!("{e:?}")));
            }
        }
        let n = elements.len();
        Ok(Self {
            elements,
            index,
            sums: vec![None; n * n],
            products: vec![None; n * n],
        })
    }

    /// Build a hyperfield and fill both tables in one go.
    pub fn from_tables(
        elements: Vec<E>,
        sums: impl IntoIterator<Item = ((E, E), ElementSet<E>)>,
        products: impl IntoIterator<Item = ((E, E), E)>,
    ) -> Result<Self, HyperError> {
        let mut field = Self::new(elements)?;
        for ((u, v), sum) in sums {
            field.set_sum(&u, &v, sum)?;
        }
        for ((u, v), product) in products {
            field.set_product(&u, &v, product)?;
        }
        Ok(field)
    }

    /// Build a total hyperfield from dense row-major tables over distinct
    /// elements. Used for presets whose data is known to be well-formed.
    pub(crate) fn from_dense(elements: Vec<E>, sums: Vec<ElementSet<E>>, products: Vec<E>) -> Self {
        debug_assert_eq!(sums.len(), elements.len() * elements.len());
        debug_assert_eq!(products.len(), elements.len() * elements.len());
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        Self {
            elements,
            index,
            sums: sums.into_iter().map(Some).collect(),
            products: products.into_iter().map(Some).collect(),
        }
    }

    /// Record `u ⊕ v = sum`, replacing any previous entry.
    pub fn set_sum(&mut self, u: &E, v: &E, sum: ElementSet<E>) -> Result<(), HyperError> {
        let slot = self.known_slot(u, v)?;
        if sum.is_empty() {
            return Err(HyperError::EmptySum {
                left: format!("{u:?}"),
                right: format!("{v:?}"),
            });
        }
        if let Some(stray) = sum.iter().find(|e| !self.contains(e)) {
            return Err(HyperError::UnknownElement(format!("{stray:?}")));
        }
        self.sums[slot] = Some(sum);
        Ok(())
    }

    /// Record `u ⊙ v = product`, replacing any previous entry.
    pub fn set_product(&mut self, u: &E, v: &E, product: E) -> Result<(), HyperError> {
        let slot = self.known_slot(u, v)?;
        if !self.contains(&product) {
            return Err(HyperError::UnknownElement(format!("{product:?}")));
        }
        self.products[slot] = Some(product);
        Ok(())
    }

    /// The set of possible sums `u ⊕ v`.
    pub fn hyper_add(&self, u: &E, v: &E) -> Result<&ElementSet<E>, HyperError> {
        self.slot(u, v)
            .and_then(|s| self.sums[s].as_ref())
            .ok_or_else(|| HyperError::undefined(Operation::HyperAdd, u, v))
    }

    /// The product `u ⊙ v`.
    pub fn mul(&self, u: &E, v: &E) -> Result<&E, HyperError> {
        self.slot(u, v)
            .and_then(|s| self.products[s].as_ref())
            .ok_or_else(|| HyperError::undefined(Operation::Mul, u, v))
    }

    /// Hyperaddition lifted to sets: the union of `u ⊕ v` over every
    /// `u ∈ a`, `v ∈ b`.
    ///
    /// Either side being empty yields the empty set.
    pub fn hyper_add_sets(
        &self,
        a: &ElementSet<E>,
        b: &ElementSet<E>,
    ) -> Result<ElementSet<E>, HyperError> {
        let mut out = ElementSet::new();
        for u in a {
            for v in b {
                out.union_with(self.hyper_add(u, v)?);
            }
        }
        Ok(out)
    }

    /// Every `(operation, u, v)` over K × K with no table entry, in K order,
    /// hyperaddition gaps first.
    pub fn missing_pairs(&self) -> Vec<(Operation, E, E)> {
        let n = self.order();
        let pairs = || (0..n).flat_map(move |i| (0..n).map(move |j| (i, j)));
        let add_gaps = pairs()
            .filter(|&(i, j)| self.sums[i * n + j].is_none())
            .map(|(i, j)| (Operation::HyperAdd, i, j));
        let mul_gaps = pairs()
            .filter(|&(i, j)| self.products[i * n + j].is_none())
            .map(|(i, j)| (Operation::Mul, i, j));
        add_gaps
            .chain(mul_gaps)
            .map(|(op, i, j)| (op, self.elements[i].clone(), self.elements[j].clone()))
            .collect()
    }

    /// The universe K in declared order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// |K|.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Whether `e` belongs to K.
    pub fn contains(&self, e: &E) -> bool {
        self.index.contains_key(e)
    }

    fn slot(&self, u: &E, v: &E) -> Option<usize> {
        let i = self.index.get(u)?;
        let j = self.index.get(v)?;
        Some(i * self.order() + j)
    }

    fn known_slot(&self, u: &E, v: &E) -> Result<usize, HyperError> {
        let position = |e: &E| {
            self.index
                .get(e)
                .copied()
                .ok_or_else(|| HyperError::UnknownElement(format!("{e:?}")))
        };
        Ok(position(u)? * self.order() + position(v)?)
    }
}
