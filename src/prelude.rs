//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use fixed_ivp::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `RightHandSide`, `TimeGrid`, `Solution`, `Error`.
//! - Methods: `Stepper`, `Euler`, `Midpoint`, `Rk4`, the `euler`/`midpoint`/`rk4`
//!   entry points and the generic `integrate` driver.
//! - High-level API: `solve_ivp`, `IVPOptions` and `Method`.
//!

pub use crate::core::{grid::TimeGrid, rhs::RightHandSide, solution::Solution};
pub use crate::error::Error;
pub use crate::methods::{Euler, Midpoint, Rk4, Stepper, euler, integrate, midpoint, rk4};
pub use crate::solve::{IVPOptions, Method, solve_ivp};
