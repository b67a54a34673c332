//! Errors for the Taylor integrator.

use crate::Float;

/// Validation and runtime errors returned by the integrator entry points.
#[derive(Debug, Clone)]
pub enum Error {
    OrderMustBePositive(usize),
    AbsTolMustBePositive(Float),
    MaxStepMustBePositive(Float),
    MaxStepsMustBePositive(usize),
    EmptyState,
    /// Right-hand side arity disagrees with the state: (expected, got).
    DimensionMismatch(usize, usize),
    /// The step estimate is unbounded and no maximum step is configured.
    DegenerateStepSize(Float),
    /// The selected step is zero or too small to advance the time component.
    StepSizeTooSmall(Float),
    /// A Taylor coefficient or state component stopped being finite.
    NonFiniteState(Float),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OrderMustBePositive(v) => {
                write!(f, "expansion order must be >= 1 (got {})", v)
            }
            Error::AbsTolMustBePositive(v) => {
                write!(f, "abs_tol must be positive and finite (got {})", v)
            }
            Error::MaxStepMustBePositive(v) => {
                write!(f, "max_step must be positive and finite (got {})", v)
            }
            Error::MaxStepsMustBePositive(v) => {
                write!(f, "max_steps must be positive (got {})", v)
            }
            Error::EmptyState => {
                write!(f, "state vector is empty; component 0 must hold the time variable")
            }
            Error::DimensionMismatch(expected, got) => write!(
                f,
                "right-hand side returned {} components (state has {})",
                got, expected
            ),
            Error::DegenerateStepSize(v) => write!(
                f,
                "step estimate is unbounded (got {}); configure max_step to clamp it",
                v
            ),
            Error::StepSizeTooSmall(v) => write!(
                f,
                "step size {} is too small to advance the solution",
                v
            ),
            Error::NonFiniteState(v) => {
                write!(f, "solution became non-finite (got {})", v)
            }
        }
    }
}
