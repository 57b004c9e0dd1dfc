#![allow(dead_code)]

use fixed_ivp::Float;
use fixed_ivp::prelude::*;

/// dx/dt = -x with x(0) = 1, exact solution e^{-t}.
pub fn decay(x: Float, _t: Float) -> Float {
    -x
}

/// dx/dt = x with x(0) = 1, exact solution e^{t}.
pub fn growth(x: Float, _t: Float) -> Float {
    x
}

/// The forced cubic the demos run: dx/dt = sin(t) - x^3.
pub fn cubic_forcing(x: Float, t: Float) -> Float {
    t.sin() - x * x * x
}

/// Absolute error at t_max against a closed-form solution.
pub fn final_error(
    method: Method,
    f: fn(Float, Float) -> Float,
    t_max: Float,
    n: usize,
    exact: Float,
) -> Float {
    let options = IVPOptions::builder().method(method).build();
    let sol = solve_ivp(&f, 1.0, t_max, n, options).unwrap();
    (sol.last().unwrap().1 - exact).abs()
}
