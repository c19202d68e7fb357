//! # Solver and Expander Properties
//!
//! Random hyperfield tables (no axioms enforced) and random systems, checked
//! against a naive reference written with nested loops and bit masks, sharing
//! no code with the crate under test.

use std::collections::BTreeSet;

use hyperlin_core::{ElementSet, Hyperfield, Matrix};
use hyperlin_solve::{
    expand, expansion_count, row_product_set, solve, solve_family, SolveOptions,
};
use proptest::prelude::*;

/// Dense random tables over `0..order`. `sums[i]` is a non-empty bit mask.
#[derive(Debug, Clone)]
struct Tables {
    order: u8,
    sums: Vec<u8>,
    products: Vec<u8>,
}

impl Tables {
    fn sum(&self, u: u8, v: u8) -> impl Iterator<Item = u8> + '_ {
        let mask = self.sums[usize::from(u) * usize::from(self.order) + usize::from(v)];
        (0..self.order).filter(move |e| mask & (1u8 << *e) != 0)
    }

    fn product(&self, u: u8, v: u8) -> u8 {
        self.products[usize::from(u) * usize::from(self.order) + usize::from(v)]
    }

    fn hyperfield(&self) -> Hyperfield<u8> {
        let pairs: Vec<(u8, u8)> = (0..self.order)
            .flat_map(|u| (0..self.order).map(move |v| (u, v)))
            .collect();
        Hyperfield::from_tables(
            (0..self.order).collect(),
            pairs
                .iter()
                .map(|&(u, v)| ((u, v), self.sum(u, v).collect::<ElementSet<u8>>())),
            pairs.iter().map(|&(u, v)| ((u, v), self.product(u, v))),
        )
        .unwrap()
    }
}

fn tables() -> impl Strategy<Value = Tables> {
    (1u8..=3)
        .prop_flat_map(|n| {
            let cells = usize::from(n) * usize::from(n);
            (
                Just(n),
                prop::collection::vec(1u8..(1 << n), cells),
                prop::collection::vec(0..n, cells),
            )
        })
        .prop_map(|(order, sums, products)| Tables {
            order,
            sums,
            products,
        })
}

/// Tables, column count, coefficient rows, target.
fn system() -> impl Strategy<Value = (Tables, usize, Vec<Vec<u8>>, Vec<u8>)> {
    tables().prop_flat_map(|t| {
        let n = t.order;
        (0usize..=3, 0usize..=3).prop_flat_map(move |(rows, cols)| {
            (
                Just(t.clone()),
                Just(cols),
                prop::collection::vec(prop::collection::vec(0..n, cols), rows),
                prop::collection::vec(0..n, rows),
            )
        })
    })
}

/// Tables, ambiguous cells as masks (row-major), rows, cols, target.
fn family() -> impl Strategy<Value = (Tables, usize, usize, Vec<u8>, Vec<u8>)> {
    tables().prop_flat_map(|t| {
        let n = t.order;
        (1usize..=2, 1usize..=2).prop_flat_map(move |(rows, cols)| {
            (
                Just(t.clone()),
                Just(rows),
                Just(cols),
                prop::collection::vec(1u8..(1 << n), rows * cols),
                prop::collection::vec(0..n, rows),
            )
        })
    })
}

fn reference_solve(t: &Tables, a: &[Vec<u8>], cols: usize, b: &[u8]) -> Vec<Vec<u8>> {
    let n = usize::from(t.order);
    let total = n.pow(cols as u32);
    let mut out = Vec::new();
    for code in 0..total {
        let mut x = vec![0u8; cols];
        let mut rest = code;
        for j in (0..cols).rev() {
            x[j] = (rest % n) as u8;
            rest /= n;
        }
        let mut ok = true;
        for (row, &target) in a.iter().zip(b) {
            if row.is_empty() {
                ok = false;
                break;
            }
            let mut possible: BTreeSet<u8> = BTreeSet::new();
            possible.insert(t.product(row[0], x[0]));
            for j in 1..cols {
                let p = t.product(row[j], x[j]);
                let mut next = BTreeSet::new();
                for &u in &possible {
                    next.extend(t.sum(u, p));
                }
                possible = next;
            }
            if !possible.contains(&target) {
                ok = false;
                break;
            }
        }
        if ok {
            out.push(x);
        }
    }
    out
}

fn mask_set(mask: u8, order: u8) -> ElementSet<u8> {
    (0..order).filter(|e| mask & (1u8 << *e) != 0).collect()
}

proptest! {
    /// The solver returns exactly the reference's solutions, in the same order.
    #[test]
    fn solve_matches_reference((t, cols, rows, b) in system()) {
        let field = t.hyperfield();
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let a = Matrix::from_flat(rows.len(), cols, flat).unwrap();
        let got = solve(&field, &a, &b).unwrap();
        prop_assert_eq!(got, reference_solve(&t, &rows, cols, &b));
    }

    /// Every returned X satisfies containment on every row.
    #[test]
    fn solutions_satisfy_containment((t, cols, rows, b) in system()) {
        let field = t.hyperfield();
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let a = Matrix::from_flat(rows.len(), cols, flat).unwrap();
        for x in solve(&field, &a, &b).unwrap() {
            for (row, target) in a.iter_rows().zip(&b) {
                let set = row_product_set(&field, row, &x).unwrap();
                prop_assert!(set.contains(target));
            }
        }
    }

    /// Two runs on identical input agree, order included.
    #[test]
    fn solve_is_deterministic((t, cols, rows, b) in system()) {
        let field = t.hyperfield();
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let a = Matrix::from_flat(rows.len(), cols, flat).unwrap();
        prop_assert_eq!(solve(&field, &a, &b).unwrap(), solve(&field, &a, &b).unwrap());
    }

    /// Expansion count is the product of cell sizes; every expansion keeps
    /// the shape and picks members of each cell.
    #[test]
    fn expansion_count_and_shape((t, rows, cols, masks, _b) in family()) {
        let cells: Vec<ElementSet<u8>> = masks.iter().map(|&m| mask_set(m, t.order)).collect();
        let product: usize = cells.iter().map(ElementSet::len).product();
        let ambiguous = Matrix::from_flat(rows, cols, cells).unwrap();
        let all = expand(&ambiguous);
        prop_assert_eq!(all.len(), product);
        prop_assert_eq!(expansion_count(&ambiguous), Some(product as u128));
        for concrete in &all {
            prop_assert_eq!(concrete.shape(), (rows, cols));
            for (cell, chosen) in ambiguous.cells().iter().zip(concrete.cells()) {
                prop_assert!(cell.contains(chosen));
            }
        }
    }

    /// Parallel family solving returns the sequential result unchanged.
    #[test]
    fn parallel_family_matches_sequential((t, rows, cols, masks, b) in family()) {
        let field = t.hyperfield();
        let cells: Vec<ElementSet<u8>> = masks.iter().map(|&m| mask_set(m, t.order)).collect();
        let ambiguous = Matrix::from_flat(rows, cols, cells).unwrap();
        let sequential = solve_family(&field, &ambiguous, &b, &SolveOptions::default()).unwrap();
        let parallel = solve_family(
            &field,
            &ambiguous,
            &b,
            &SolveOptions { parallel: true, ..SolveOptions::default() },
        )
        .unwrap();
        prop_assert_eq!(&parallel, &sequential);
        for (i, r) in sequential.iter().enumerate() {
            prop_assert_eq!(r.index, i);
            prop_assert_eq!(&r.solutions, &solve(&field, &r.matrix, &b).unwrap());
        }
    }
}
