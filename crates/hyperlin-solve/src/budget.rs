//! # Enumeration Budget
//!
//! Both enumerations are exponential: expanding an ambiguous matrix yields
//! the product of its cell sizes, and solving one concrete matrix visits
//! |K|^n_cols candidates. A [`Budget`] caps each count. Limits are checked
//! against exact counts before any enumeration starts, so an oversized
//! problem fails immediately instead of running for hours.

use hyperlin_core::{Element, ElementSet, HyperError, Matrix, Resource};

/// Upper bounds on enumeration sizes. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    /// Maximum number of concrete matrices an expansion may produce.
    pub max_expansions: Option<u64>,
    /// Maximum number of candidate vectors per concrete matrix.
    pub max_candidates: Option<u64>,
}

impl Budget {
    /// A budget that never rejects.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Reject `required` if it exceeds the limit for `resource`.
    ///
    /// `required == None` stands for a count too large for `u128`, which
    /// exceeds any finite limit.
    pub fn check(&self, resource: Resource, required: Option<u128>) -> Result<(), HyperError> {
        let limit = match resource {
            Resource::Expansions => self.max_expansions,
            Resource::Candidates => self.max_candidates,
        };
        let Some(limit) = limit.map(u128::from) else {
            return Ok(());
        };
        match required {
            Some(n) if n <= limit => Ok(()),
            _ => Err(HyperError::ResourceExceeded {
                resource,
                required: required.map_or_else(|| "overflow".to_string(), |n| n.to_string()),
                limit,
            }),
        }
    }
}

/// Number of concrete matrices `matrix` expands to: the product of its
/// cell sizes. `None` if the product overflows `u128`.
pub fn expansion_count<E: Element>(matrix: &Matrix<ElementSet<E>>) -> Option<u128> {
    matrix
        .cells()
        .iter()
        .try_fold(1u128, |acc, cell| acc.checked_mul(cell.len() as u128))
}

/// Number of candidate vectors over a universe of `order` elements with
/// `cols` unknowns: `order^cols`. `None` on overflow.
pub fn candidate_count(order: usize, cols: usize) -> Option<u128> {
    u32::try_from(cols)
        .ok()
        .and_then(|exp| (order as u128).checked_pow(exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperlin_core::presets;

    #[test]
    fn unlimited_accepts_everything() {
        let budget = Budget::unlimited();
        assert!(budget.check(Resource::Expansions, None).is_ok());
        assert!(budget.check(Resource::Candidates, Some(u128::MAX)).is_ok());
    }

    #[test]
    fn limit_is_inclusive() {
        let budget = Budget {
            max_expansions: Some(768),
            max_candidates: None,
        };
        assert!(budget.check(Resource::Expansions, Some(768)).is_ok());
        let err = budget.check(Resource::Expansions, Some(769)).unwrap_err();
        assert_eq!(
            err,
            HyperError::ResourceExceeded {
                resource: Resource::Expansions,
                required: "769".to_string(),
                limit: 768,
            }
        );
    }

    #[test]
    fn overflowed_count_exceeds_any_limit() {
        let budget = Budget {
            max_expansions: None,
            max_candidates: Some(u64::MAX),
        };
        let err = budget.check(Resource::Candidates, None).unwrap_err();
        assert!(format!("{err}").contains("overflow"));
    }

    #[test]
    fn example_matrix_expansion_count() {
        assert_eq!(expansion_count(&presets::example_matrix()), Some(768));
    }

    #[test]
    fn candidate_counts() {
        assert_eq!(candidate_count(3, 3), Some(27));
        assert_eq!(candidate_count(0, 2), Some(0));
        assert_eq!(candidate_count(0, 0), Some(1));
        assert_eq!(candidate_count(5, 0), Some(1));
        assert_eq!(candidate_count(usize::MAX, 3), None);
    }
}
