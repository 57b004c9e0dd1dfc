//! Explicit (forward) Euler fixed-step integrator.

use crate::{
    Float,
    core::{rhs::RightHandSide, solution::Solution},
    error::Error,
};

use super::{Stepper, integrate};

/// First-order explicit Euler rule: `x + h * f(x, t)`.
///
/// No stability control. For stiff or rapidly varying `f` a large `h` makes
/// the trace oscillate or blow up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    fn stages(&self) -> usize {
        1
    }

    fn order(&self) -> usize {
        1
    }

    #[inline]
    fn step<F>(&self, f: &F, x: Float, t: Float, h: Float) -> Float
    where
        F: RightHandSide + ?Sized,
    {
        x + h * f.rhs(x, t)
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(0) = x0` over `n` points on `[0, t_max]`
/// with the explicit Euler method.
pub fn euler<F>(f: &F, x0: Float, t_max: Float, n: usize) -> Result<Solution, Error>
where
    F: RightHandSide + ?Sized,
{
    integrate(&Euler, f, x0, t_max, n)
}
