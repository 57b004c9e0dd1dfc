//! High-level solve module: method selection, options and the solve_ivp entry point.

pub mod options;
pub mod solve_ivp;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use options::{IVPOptions, Method, ParseMethodError};
pub use solve_ivp::solve_ivp;
