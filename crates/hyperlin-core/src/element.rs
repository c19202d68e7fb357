//! # Elements and Element Sets
//!
//! A hyperfield element is any opaque value that can be cloned, compared for
//! equality, hashed, and printed for diagnostics. Nothing numeric is assumed:
//! the same machinery runs over `u8`, strings, or user enums.
//!
//! [`ElementSet`] is the multi-valued counterpart. Hyperaddition results,
//! row-product sets, and the cells of an ambiguous matrix are all element
//! sets, while multiplication results and concrete matrix cells are bare
//! elements. Keeping the two apart in the type system means a single value
//! can never be mistaken for a set of candidates.
//!
//! ## Ordering
//!
//! Sets preserve first-insertion order. Order carries no mathematical
//! meaning (equality ignores it), but it fixes the enumeration order of
//! ambiguous cells so that expansion output is reproducible.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bound satisfied by every usable hyperfield element type.
pub trait Element: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Element for T {}

/// An insertion-ordered, duplicate-free set of hyperfield elements.
///
/// Backed by a `Vec`: hyperfields handled by exhaustive search are small,
/// so a linear membership scan beats hashing for the set sizes seen here.
#[derive(Clone)]
pub struct ElementSet<E> {
    items: Vec<E>,
}

impl<E: Element> ElementSet<E> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a set holding exactly one element.
    pub fn singleton(element: E) -> Self {
        Self {
            items: vec![element],
        }
    }

    /// Insert an element. Returns `true` if it was not already present.
    pub fn insert(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.items.push(element);
        true
    }

    /// Membership test.
    pub fn contains(&self, element: &E) -> bool {
        self.items.iter().any(|e| e == element)
    }

    /// Add every element of `other` not already present.
    pub fn union_with(&mut self, other: &ElementSet<E>) {
        for e in &other.items {
            self.insert(e.clone());
        }
    }

    /// Whether every element of `self` is in `other`.
    pub fn is_subset(&self, other: &ElementSet<E>) -> bool {
        self.items.iter().all(|e| other.contains(e))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Elements in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Consume the set, returning its elements in insertion order.
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }
}

impl<E: Element> Default for ElementSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> PartialEq for ElementSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<E: Element> Eq for ElementSet<E> {}

impl<E: fmt::Debug> fmt::Debug for ElementSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<E: Element> FromIterator<E> for ElementSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Element> Extend<E> for ElementSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

impl<E: Element> From<Vec<E>> for ElementSet<E> {
    fn from(items: Vec<E>) -> Self {
        items.into_iter().collect()
    }
}

impl<E: Element, const N: usize> From<[E; N]> for ElementSet<E> {
    fn from(items: [E; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<E> IntoIterator for ElementSet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ElementSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E: Serialize> Serialize for ElementSet<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, E: Element + Deserialize<'de>> Deserialize<'de> for ElementSet<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<E>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = ElementSet::new();
        assert!(set.insert(1u8));
        assert!(!set.insert(1u8));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn preserves_first_insertion_order() {
        let set: ElementSet<u8> = vec![2, 0, 2, 1, 0].into();
        assert_eq!(set.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn equality_ignores_order() {
        let a = ElementSet::from([0u8, 1, 2]);
        let b = ElementSet::from([2u8, 1, 0]);
        assert_eq!(a, b);
        assert_ne!(a, ElementSet::from([0u8, 1]));
    }

    #[test]
    fn union_with_merges_without_duplicates() {
        let mut a = ElementSet::from([0u8, 1]);
        a.union_with(&ElementSet::from([1u8, 2]));
        assert_eq!(a.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn subset_relation() {
        let small = ElementSet::singleton("x");
        let big = ElementSet::from(["y", "x"]);
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(ElementSet::<&str>::new().is_subset(&small));
    }

    #[test]
    fn debug_renders_as_set() {
        let set = ElementSet::from([1u8, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    proptest::proptest! {
        #[test]
        fn collect_is_dedup_preserving_membership(items in proptest::collection::vec(0u8..6, 0..20)) {
            let set: ElementSet<u8> = items.iter().copied().collect();
            proptest::prop_assert!(set.len() <= items.len());
            proptest::prop_assert!(items.iter().all(|e| set.contains(e)));
            let reversed: ElementSet<u8> = items.iter().rev().copied().collect();
            proptest::prop_assert_eq!(&set, &reversed);
        }
    }

    #[test]
    fn serde_roundtrip_drops_duplicates() {
        let set: ElementSet<u8> = serde_json::from_str("[1, 2, 1]").unwrap();
        assert_eq!(set.as_slice(), &[1, 2]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2]");
    }
}
