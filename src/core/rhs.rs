//! User-supplied right-hand side.

use crate::Float;

/// User-supplied right-hand side of the scalar ODE dx/dt = f(x, t).
///
/// The integrators call `rhs` with the current state `x` and time `t` and
/// expect the slope back. Implementations should be pure functions of their
/// two arguments; no integrator memoises or reorders the calls beyond what
/// its stepping rule prescribes.
///
/// Every `Fn(Float, Float) -> Float` closure or function item implements
/// this trait, so most callers never name it.
///
/// # Example
///
/// ```ignore
/// struct Logistic { r: f64, k: f64 }
/// impl RightHandSide for Logistic {
///     fn rhs(&self, x: f64, _t: f64) -> f64 {
///         self.r * x * (1.0 - x / self.k)
///     }
/// }
/// ```
pub trait RightHandSide {
    fn rhs(&self, x: Float, t: Float) -> Float;
}

impl<F> RightHandSide for F
where
    F: Fn(Float, Float) -> Float,
{
    #[inline]
    fn rhs(&self, x: Float, t: Float) -> Float {
        self(x, t)
    }
}
