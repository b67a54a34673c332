//! Example integrating a simple harmonic oscillator with a 20th-order
//! Taylor expansion.

use std::f64::consts::PI;

use taylor_ode::prelude::*;

struct HarmonicOscillator;

impl Ode for HarmonicOscillator {
    fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T> {
        // State is [t, y1, y2] with the time variable first.
        vec![T::one(), y[2].clone(), -y[1].clone()]
    }
}

fn main() {
    let y0 = [0.0, 1.0, 0.0];
    let t_max = 2.0 * PI;
    let options = Options::<DefaultStepSize>::builder()
        .order(20)
        .abs_tol(1e-20)
        .build();

    match solve_ivp(&HarmonicOscillator, &y0, t_max, options) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Final state: t = {:.5}, y = {:?}", sol.x, &sol.y[1..]);
            println!("Number of steps taken: {}", sol.nstep);
            println!("Number of function evaluations: {}", sol.nfev);

            for (ti, yi) in sol.t.iter().zip(sol.yout.iter()) {
                println!("t = {:>8.5}, y1 = {:>12.9}, y2 = {:>12.9}", ti, yi[1], yi[2]);
            }
        }
        Err(err) => eprintln!("Integration failed: {:?}", err),
    }
}
