//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation with each fixed-step method and
//! compare against the closed form.
//!
//! Equation:
//! dx/dt = -x
//!
//! Initial condition: x(0) = 1.0
//!

use fixed_ivp::{Float, prelude::*};

fn main() {
    let f = |x: Float, _t: Float| -x;
    let x0 = 1.0;
    let t_max = 5.0;
    let n = 51;

    for method in Method::ALL {
        let options = IVPOptions::builder().method(method).build();

        match solve_ivp(&f, x0, t_max, n, options) {
            Ok(sol) => {
                let Some((t_end, x_end)) = sol.last() else {
                    continue;
                };
                let exact = (-t_end).exp();
                println!("Method: {}", method);
                println!("Final state: t = {:.5}, x = {:.10}", t_end, x_end);
                println!("Absolute error at t_max: {:.3e}", (x_end - exact).abs());
                println!("Number of function evaluations: {}", sol.nfev);
                println!("Number of steps taken: {}", sol.nstep);

                // Print a few sampled values
                for (ti, xi) in sol.iter().step_by(10) {
                    println!("t = {:.4}, x = {:.8}, exact = {:.8}", ti, xi, (-ti).exp());
                }
                println!();
            }
            Err(e) => eprintln!("Integration failed: {}", e),
        }
    }
}
