//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    core::{rhs::RightHandSide, solution::Solution},
    error::Error,
};

use super::{Stepper, integrate};

/// Classical explicit Runge-Kutta 4 (RK4) rule.
///
/// ```text
/// k1 = h * f(x,          t)
/// k2 = h * f(x + k1 / 2, t + h / 2)
/// k3 = h * f(x + k2 / 2, t + h / 2)
/// k4 = h * f(x + k3,     t + h)
/// x_next = x + (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// A stage evaluated at the wrong offset raises nothing and only shows up as
/// a loss of order, so the tableau is checked against closed-form solutions
/// in the tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn stages(&self) -> usize {
        4
    }

    fn order(&self) -> usize {
        4
    }

    #[inline]
    fn step<F>(&self, f: &F, x: Float, t: Float, h: Float) -> Float
    where
        F: RightHandSide + ?Sized,
    {
        // Stage computations
        let k1 = h * f.rhs(x, t);
        let k2 = h * f.rhs(x + A21 * k1, t + C2 * h);
        let k3 = h * f.rhs(x + A32 * k2, t + C3 * h);
        let k4 = h * f.rhs(x + A43 * k3, t + C4 * h);

        // Weights (1, 2, 2, 1) / 6
        x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(0) = x0` over `n` points on `[0, t_max]`
/// with the classical fourth-order Runge-Kutta method.
pub fn rk4<F>(f: &F, x0: Float, t_max: Float, n: usize) -> Result<Solution, Error>
where
    F: RightHandSide + ?Sized,
{
    integrate(&Rk4, f, x0, t_max, n)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn stage_arguments_follow_the_classical_tableau() {
        let calls = RefCell::new(Vec::new());
        let f = |x: Float, t: Float| {
            calls.borrow_mut().push((x, t));
            4.0
        };
        let next = Rk4.step(&f, 1.0, 2.0, 0.5);
        // Every k is 2; stage states 1, 2, 2, 3 at times 2, 2.25, 2.25, 2.5.
        assert_eq!(
            *calls.borrow(),
            vec![(1.0, 2.0), (2.0, 2.25), (2.0, 2.25), (3.0, 2.5)]
        );
        assert_eq!(next, 3.0);
    }

    #[test]
    fn cubic_in_time_is_integrated_exactly() {
        // dx/dt = 4t^3, x(t) = t^4; Simpson weights are exact for cubics.
        let sol = rk4(&|_x: Float, t: Float| 4.0 * t * t * t, 0.0, 4.0, 5).unwrap();
        assert_eq!(sol.x, vec![0.0, 1.0, 16.0, 81.0, 256.0]);
    }

    #[test]
    fn one_step_of_linear_decay_matches_the_taylor_polynomial() {
        // For dx/dt = -x one RK4 step multiplies by 1 - h + h^2/2 - h^3/6 + h^4/24.
        let h: Float = 0.5;
        let expected = 1.0 - h + h * h / 2.0 - h * h * h / 6.0 + h * h * h * h / 24.0;
        let next = Rk4.step(&|x: Float, _t: Float| -x, 1.0, 0.0, h);
        assert!((next - expected).abs() <= 16.0 * Float::EPSILON);
    }
}
