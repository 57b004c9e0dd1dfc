//! solve_ivp entry point implementation

use crate::{
    Float,
    core::{rhs::RightHandSide, solution::Solution},
    error::Error,
    methods::integrate,
};

use super::options::IVPOptions;

/// Solve `dx/dt = f(x, t)`, `x(0) = x0`, on `n` uniform points over
/// `[0, t_max]` with the method chosen in `options`.
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    t_max: Float,
    n: usize,
    options: IVPOptions,
) -> Result<Solution, Error>
where
    F: RightHandSide + ?Sized,
{
    integrate(&options.method, f, x0, t_max, n)
}
