#![allow(dead_code)]

use taylor_ode::prelude::*;

/// Simple harmonic oscillator with time bookkeeping: state [t, y1, y2],
/// solution y1 = cos(t - t0), y2 = -sin(t - t0) for y0 = [t0, 1, 0].
pub struct Sho;

impl Ode for Sho {
    fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T> {
        vec![T::one(), y[2].clone(), -y[1].clone()]
    }
}

/// Exponential decay y' = -lambda * y, parameterized through the struct.
pub struct Decay {
    pub lambda: Float,
}

impl Ode for Decay {
    fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T> {
        vec![T::one(), -(y[1].clone() * T::from_float(self.lambda))]
    }
}

/// Frozen system y' = 0: every governing Taylor coefficient vanishes, so the
/// step estimator is unbounded.
pub struct Frozen;

impl Ode for Frozen {
    fn ode<T: Scalar>(&self, _y: &[T]) -> Vec<T> {
        vec![T::one(), T::zero()]
    }
}

pub fn default_opts() -> Options<'static, DefaultStepSize> {
    Options::<DefaultStepSize>::builder()
        .order(20)
        .abs_tol(1e-20)
        .build()
}
