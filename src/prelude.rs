//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use taylor_ode::prelude::*;
//! ```

pub use crate::{
    Float,
    error::Error,
    ode::Ode,
    series::{Scalar, Series},
    solution::Solution,
    solve::{Options, solve_ivp},
    status::Status,
    step::{Step, taylor_step, taylor_step_into},
    stepsize::{DefaultStepSize, StepSize},
};
