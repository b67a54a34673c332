//! A library implementing the Taylor-series method for solving initial value
//! problems (IVPs) for ordinary differential equations (ODEs).
//!
//! The solver expands the solution in a truncated power series at the current
//! point by a coefficient recurrence driven by the user-supplied right-hand
//! side, picks a step size from the last two Taylor coefficients against an
//! absolute tolerance, and advances the state by Horner evaluation of the
//! series. Write the right-hand side once, generically over [`Scalar`], and it
//! is evaluated both on plain numbers and on truncated series.
//!
//! By convention component 0 of the state vector is the independent variable
//! (time); the right-hand side must return a derivative of exactly one for it.

mod error;
mod ode;
mod propagate;
mod recurrence;
mod series;
mod solution;
mod solve;
mod status;
mod step;
mod stepsize;

pub mod prelude;

pub use error::Error;
pub use ode::Ode;
pub use propagate::propagate;
pub use recurrence::taylor_coefficients;
pub use series::{Scalar, Series};
pub use solution::Solution;
pub use solve::{Options, solve_ivp};
pub use status::Status;
pub use step::{Step, taylor_step, taylor_step_into};
pub use stepsize::{DefaultStepSize, StepSize, component_step};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
