//! Explicit midpoint (second-order Runge-Kutta) fixed-step integrator.

use crate::{
    Float,
    core::{rhs::RightHandSide, solution::Solution},
    error::Error,
};

use super::{Stepper, integrate};

/// Explicit midpoint rule.
///
/// ```text
/// k1 = h * f(x, t)
/// k2 = h * f(x + k1 / 2, t + h / 2)
/// x_next = x + k2
/// ```
///
/// `k1` only locates the midpoint; the update uses `k2` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Midpoint;

impl Stepper for Midpoint {
    fn stages(&self) -> usize {
        2
    }

    fn order(&self) -> usize {
        2
    }

    #[inline]
    fn step<F>(&self, f: &F, x: Float, t: Float, h: Float) -> Float
    where
        F: RightHandSide + ?Sized,
    {
        let k1 = h * f.rhs(x, t);
        let k2 = h * f.rhs(x + A21 * k1, t + C2 * h);
        x + k2
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(0) = x0` over `n` points on `[0, t_max]`
/// with the explicit midpoint method.
pub fn midpoint<F>(f: &F, x0: Float, t_max: Float, n: usize) -> Result<Solution, Error>
where
    F: RightHandSide + ?Sized,
{
    integrate(&Midpoint, f, x0, t_max, n)
}

const C2: Float = 0.5;
const A21: Float = 0.5;
