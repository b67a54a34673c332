//! Result of an integration run.

use crate::{Float, status::Status};

/// Final state and optional step history returned by [`crate::solve_ivp`].
///
/// When step saving is enabled (the default), `t` and `yout` hold one entry
/// per accepted step plus the initial state, appended in order and never
/// rewritten; `yout` rows are full state vectors with time at component 0.
/// With saving disabled both are empty.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Final value of the time component (equals `y[0]`).
    pub x: Float,
    /// Final state vector.
    pub y: Vec<Float>,
    /// Last accepted step size (0 if no step was taken).
    pub h: Float,
    /// Time component at each saved step.
    pub t: Vec<Float>,
    /// Saved state rows, one per accepted step plus the initial state.
    pub yout: Vec<Vec<Float>>,
    /// Number of accepted steps.
    pub nstep: usize,
    /// Number of right-hand-side evaluations.
    pub nfev: usize,
    pub status: Status,
}
