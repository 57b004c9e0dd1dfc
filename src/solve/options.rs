//! Options and method selection for solve_ivp

use std::{fmt, str::FromStr};

use bon::Builder;

use crate::{
    Float,
    core::rhs::RightHandSide,
    methods::{Euler, Midpoint, Rk4, Stepper},
};

/// Fixed-step method selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Explicit Euler, first order
    Euler,
    /// Explicit midpoint (RK2), second order
    Midpoint,
    /// Classic RK4, fourth order
    RK4,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Euler, Method::Midpoint, Method::RK4];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Midpoint => "midpoint",
            Method::RK4 => "rk4",
        }
    }
}

impl Stepper for Method {
    fn stages(&self) -> usize {
        match self {
            Method::Euler => Euler.stages(),
            Method::Midpoint => Midpoint.stages(),
            Method::RK4 => Rk4.stages(),
        }
    }

    fn order(&self) -> usize {
        match self {
            Method::Euler => Euler.order(),
            Method::Midpoint => Midpoint.order(),
            Method::RK4 => Rk4.order(),
        }
    }

    #[inline]
    fn step<F>(&self, f: &F, x: Float, t: Float, h: Float) -> Float
    where
        F: RightHandSide + ?Sized,
    {
        match self {
            Method::Euler => Euler.step(f, x, t, h),
            Method::Midpoint => Midpoint.step(f, x, t, h),
            Method::RK4 => Rk4.step(f, x, t, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}' (expected one of: euler, midpoint, rk2, rk4)")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "midpoint" | "rk2" => Ok(Method::Midpoint),
            "rk4" => Ok(Method::RK4),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp
pub struct IVPOptions {
    /// Method to use. Default: RK4.
    #[builder(default = Method::RK4)]
    pub method: Method,
}

impl Default for IVPOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
