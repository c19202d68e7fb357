//! # Preset Hyperfields and Example Data
//!
//! Small, total hyperfields used as fixtures and by the `demo` command.
//!
//! ## Sign Hyperfield
//!
//! Elements `0, 1, 2` stand for `0, +1, -1`:
//!
//! ```text
//!  ⊕ | 0    1        2            ⊙ | 0  1  2
//! ---+---------------------      ---+---------
//!  0 | {0}  {1}      {2}           0 | 0  0  0
//!  1 | {1}  {1}      {0, 1, 2}     1 | 0  1  2
//!  2 | {2}  {0, 1, 2} {2}          2 | 0  2  1
//! ```
//!
//! ## Krasner Hyperfield
//!
//! Elements `0, 1` with `1 ⊕ 1 = {0, 1}`; otherwise ordinary Boolean
//! arithmetic.

use crate::element::ElementSet;
use crate::hyperfield::Hyperfield;
use crate::matrix::Matrix;

/// The order-3 sign hyperfield over `0, 1, 2`.
#[rustfmt::skip]
pub fn sign() -> Hyperfield<u8> {
    let all = || ElementSet::from([0, 1, 2]);
    let one = ElementSet::singleton;
    Hyperfield::from_dense(
        vec![0, 1, 2],
        vec![
            one(0), one(1), one(2),
            one(1), one(1), all(),
            one(2), all(), one(2),
        ],
        vec![
            0, 0, 0,
            0, 1, 2,
            0, 2, 1,
        ],
    )
}

/// The two-element Krasner hyperfield over `0, 1`.
pub fn krasner() -> Hyperfield<u8> {
    let one = ElementSet::singleton;
    Hyperfield::from_dense(
        vec![0, 1],
        vec![one(0), one(1), one(1), ElementSet::from([0, 1])],
        vec![0, 0, 0, 1],
    )
}

/// The 3 × 3 ambiguous coefficient matrix of the demo system.
///
/// Cell sizes are 2, 2, 2, 2, 2, 2, 3, 2, 2, so it expands to
/// 2⁸ · 3 = 768 concrete matrices.
#[rustfmt::skip]
pub fn example_matrix() -> Matrix<ElementSet<u8>> {
    let cells: [&[u8]; 9] = [
        &[1, 2], &[0, 2], &[0, 1],
        &[0, 1], &[1, 2], &[0, 2],
        &[0, 1, 2], &[1, 2], &[1, 2],
    ];
    Matrix::from_parts(
        3,
        3,
        cells
            .iter()
            .map(|c| c.iter().copied().collect())
            .collect(),
    )
}

/// Target vector of the demo system.
pub fn example_target() -> Vec<u8> {
    vec![1, 2, 0]
}
