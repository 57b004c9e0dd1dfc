//! A struct representing the outputted result of a fixed-step integration.

use crate::Float;

/// Sampled result of one integration call.
///
/// `t` is the time grid and `x` the state trace; both have exactly `n`
/// entries and are index-aligned. Non-finite states produced by a diverging
/// right-hand side are kept as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub t: Vec<Float>,
    pub x: Vec<Float>,
    pub h: Float,
    pub nfev: usize,
    pub nstep: usize,
}

impl Solution {
    /// Split into the `(times, states)` pair.
    pub fn into_parts(self) -> (Vec<Float>, Vec<Float>) {
        (self.t, self.x)
    }

    /// Final sample `(t_max, x(t_max))`, or `None` for an empty solution.
    pub fn last(&self) -> Option<(Float, Float)> {
        Some((*self.t.last()?, *self.x.last()?))
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Iterate over stored sample pairs `(t_i, x_i)`.
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            x_iter: self.x.iter(),
        }
    }
}

/// Iterator over `(t, x)` pairs of a [`Solution`].
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    x_iter: std::slice::Iter<'a, Float>,
}

impl Iterator for SolutionIter<'_> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.x_iter.next()) {
            (Some(&t), Some(&x)) => Some((t, x)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.t_iter.size_hint()
    }
}

impl ExactSizeIterator for SolutionIter<'_> {}

impl<'a> IntoIterator for &'a Solution {
    type Item = (Float, Float);
    type IntoIter = SolutionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        Solution {
            t: vec![0.0, 0.5, 1.0],
            x: vec![1.0, 2.0, 4.0],
            h: 0.5,
            nfev: 2,
            nstep: 2,
        }
    }

    #[test]
    fn iter_pairs_samples_in_order() {
        let sol = sample();
        let pairs: Vec<_> = sol.iter().collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (0.5, 2.0), (1.0, 4.0)]);
        assert_eq!(sol.iter().len(), 3);
    }

    #[test]
    fn last_and_into_parts() {
        let sol = sample();
        assert_eq!(sol.last(), Some((1.0, 4.0)));
        let (t, x) = sol.into_parts();
        assert_eq!(t.len(), x.len());
    }

    #[test]
    fn last_of_an_empty_solution_is_none() {
        let sol = Solution {
            t: Vec::new(),
            x: Vec::new(),
            h: 0.0,
            nfev: 0,
            nstep: 0,
        };
        assert!(sol.is_empty());
        assert_eq!(sol.last(), None);
        assert_eq!(sol.iter().next(), None);
    }
}
