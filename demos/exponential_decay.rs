//! Example integrating parameterized exponential decay and comparing against
//! the closed-form solution.

use taylor_ode::prelude::*;

struct Decay {
    lambda: Float,
}

impl Ode for Decay {
    fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T> {
        vec![T::one(), -(y[1].clone() * T::from_float(self.lambda))]
    }
}

fn main() {
    let decay = Decay { lambda: 0.7 };
    let y0 = [0.0, 5.0];
    let t_max = 4.0;
    let options = Options::<DefaultStepSize>::builder()
        .order(16)
        .abs_tol(1e-16)
        .build();

    match solve_ivp(&decay, &y0, t_max, options) {
        Ok(sol) => {
            let exact = y0[1] * (-decay.lambda * t_max).exp();
            println!("Final status: {:?}", sol.status);
            println!("y({}) = {:.12} (exact {:.12})", sol.x, sol.y[1], exact);
            println!("absolute error: {:.3e}", (sol.y[1] - exact).abs());
            println!("steps: {}, function evaluations: {}", sol.nstep, sol.nfev);
        }
        Err(err) => eprintln!("Integration failed: {:?}", err),
    }
}
