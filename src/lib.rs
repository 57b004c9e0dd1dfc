//! Fixed-step explicit integrators for scalar initial value problems.
//!
//! Solves `dx/dt = f(x, t)` with `x(0) = x0` on a uniform grid of `n` points
//! spanning `[0, t_max]`. Three stepping rules are provided: first-order
//! Euler, second-order midpoint and the classical fourth-order Runge-Kutta
//! method. They share a single driver, so every method returns a
//! [`Solution`] with the same shape and can be swapped at the call site.
//!
//! ```rust
//! use fixed_ivp::{Float, prelude::*};
//!
//! let decay = |x: Float, _t: Float| -x;
//! let sol = rk4(&decay, 1.0, 1.0, 1000).unwrap();
//! let (_, x_end) = sol.last().unwrap();
//! assert!((x_end - (-1.0 as Float).exp()).abs() < 1e-5);
//! ```

mod error;

pub mod core;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use crate::core::{grid::TimeGrid, rhs::RightHandSide, solution::Solution};
pub use error::Error;
pub use methods::{Euler, Midpoint, Rk4, Stepper, euler, integrate, midpoint, rk4};
pub use solve::{IVPOptions, Method, solve_ivp};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("enable exactly one of the 'f32' or 'f64' features");

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
