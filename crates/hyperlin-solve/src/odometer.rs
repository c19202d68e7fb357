//! Mixed-radix counter shared by matrix expansion and candidate enumeration.
//!
//! Digit `k` runs over `0..radices[k]`, the last digit turning fastest. That
//! is the iteration order of a cartesian product taken left to right.

/// Iterator over every index tuple of a mixed-radix counter.
///
/// Zero radices yield one empty tuple (the product of no sets has one
/// element). Any radix of zero yields nothing.
#[derive(Debug, Clone)]
pub(crate) struct Odometer {
    radices: Vec<usize>,
    current: Option<Vec<usize>>,
    remaining: Option<u128>,
}

impl Odometer {
    pub(crate) fn new(radices: Vec<usize>) -> Self {
        let current = if radices.contains(&0) {
            None
        } else {
            Some(vec![0; radices.len()])
        };
        let remaining = radices
            .iter()
            .try_fold(1u128, |acc, &r| acc.checked_mul(r as u128));
        Self {
            radices,
            current,
            remaining,
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.as_mut()?;
        let out = current.clone();

        let mut exhausted = true;
        for k in (0..current.len()).rev() {
            current[k] += 1;
            if current[k] < self.radices[k] {
                exhausted = false;
                break;
            }
            current[k] = 0;
        }
        if exhausted {
            self.current = None;
        }
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_digit_turns_fastest() {
        let tuples: Vec<_> = Odometer::new(vec![2, 3]).collect();
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn no_digits_yields_one_empty_tuple() {
        let tuples: Vec<_> = Odometer::new(vec![]).collect();
        assert_eq!(tuples, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn zero_radix_yields_nothing() {
        assert_eq!(Odometer::new(vec![3, 0, 2]).count(), 0);
    }

    #[test]
    fn size_hint_counts_down() {
        let mut it = Odometer::new(vec![2, 2]);
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.by_ref().for_each(drop);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn zero_radix_size_hint_is_zero() {
        assert_eq!(Odometer::new(vec![0]).size_hint(), (0, Some(0)));
    }
}
