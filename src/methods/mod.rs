//! Fixed-step explicit integrators (Euler, midpoint, RK4) and their shared driver.

mod euler;
mod midpoint;
mod rk4;

pub use euler::{Euler, euler};
pub use midpoint::{Midpoint, midpoint};
pub use rk4::{Rk4, rk4};

use crate::{
    Float,
    core::{grid::TimeGrid, rhs::RightHandSide, solution::Solution},
    error::Error,
};

/// Per-step update rule of a fixed-step method.
///
/// `step` maps the state `x` at time `t` to the state at `t + h`, evaluating
/// the right-hand side exactly [`stages`](Stepper::stages) times. It must not
/// keep anything between calls.
pub trait Stepper {
    /// Right-hand-side evaluations per step.
    fn stages(&self) -> usize;

    /// Global order of accuracy.
    fn order(&self) -> usize;

    fn step<F>(&self, f: &F, x: Float, t: Float, h: Float) -> Float
    where
        F: RightHandSide + ?Sized;
}

/// Drive `stepper` across a uniform grid of `n` points on `[0, t_max]`.
///
/// The trace starts at `x0` and is filled left to right, each entry computed
/// from its predecessor only. Fails with [`Error::InvalidSampleCount`] when
/// `n < 2`; non-finite states are propagated without inspection.
pub fn integrate<S, F>(
    stepper: &S,
    f: &F,
    x0: Float,
    t_max: Float,
    n: usize,
) -> Result<Solution, Error>
where
    S: Stepper,
    F: RightHandSide + ?Sized,
{
    let grid = TimeGrid::new(t_max, n)?;
    let h = grid.h();

    let mut x = vec![0.0; n];
    x[0] = x0;
    for i in 0..n - 1 {
        x[i + 1] = stepper.step(f, x[i], grid[i], h);
    }

    let nstep = n - 1;
    Ok(Solution {
        t: grid.into_times(),
        x,
        h,
        nfev: nstep * stepper.stages(),
        nstep,
    })
}
