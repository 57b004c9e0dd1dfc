//! Uniform sampling grid shared by all fixed-step methods.

use crate::{Float, error::Error};

/// Uniformly spaced sample times over `[0, t_max]`.
///
/// `times[0] == 0`, `times[n - 1] == t_max` and `times[i] == i * h` for every
/// interior index, with `h = t_max / (n - 1)`. A negative `t_max` yields a
/// decreasing grid (backward integration) and a negative `h`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Float>,
    h: Float,
}

impl TimeGrid {
    /// Build a grid of `n` points from 0 to `t_max` inclusive.
    ///
    /// Returns [`Error::InvalidSampleCount`] when `n < 2`.
    pub fn new(t_max: Float, n: usize) -> Result<Self, Error> {
        if n < 2 {
            return Err(Error::InvalidSampleCount(n));
        }

        let h = t_max / (n - 1) as Float;
        let mut times: Vec<Float> = (0..n).map(|i| i as Float * h).collect();
        // Pin the endpoint so rounding in i * h never shifts it.
        times[n - 1] = t_max;

        Ok(Self { times, h })
    }

    /// Fixed step size `times[1] - times[0]`.
    pub fn h(&self) -> Float {
        self.h
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; a grid holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[Float] {
        &self.times
    }

    pub fn into_times(self) -> Vec<Float> {
        self.times
    }
}

impl std::ops::Index<usize> for TimeGrid {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.times[index]
    }
}
