//! # Example: Forced Cubic Damping
//!
//! Equation:
//! dx/dt = sin(t) - x^3
//!
//! Initial condition: x(0) = 0.0, sampled at 100 points on [0, 10].
//!
//! Prints `t,x` rows for the method named on the command line
//! (`euler`, `midpoint`/`rk2` or `rk4`; default `euler`), ready to be fed
//! to any plotting tool.

use fixed_ivp::{Float, prelude::*};

fn forcing(x: Float, t: Float) -> Float {
    t.sin() - x.powi(3)
}

fn main() {
    let method = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Method>() {
            Ok(method) => method,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => Method::Euler,
    };

    let options = IVPOptions::builder().method(method).build();
    match solve_ivp(&forcing, 0.0, 10.0, 100, options) {
        Ok(sol) => {
            println!("t,x");
            for (t, x) in &sol {
                println!("{},{}", t, x);
            }
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
