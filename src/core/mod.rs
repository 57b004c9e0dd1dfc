//! Core traits and types used throughout the library.

pub mod grid;
pub mod rhs;
pub mod solution;
