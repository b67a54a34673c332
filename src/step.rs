//! Single Taylor step: recurrence, step selection, propagation.

use crate::{
    Float,
    error::Error,
    ode::Ode,
    propagate::propagate,
    recurrence::taylor_coefficients,
    series::Series,
    stepsize::StepSize,
};

/// Outcome of one Taylor step.
#[derive(Clone, Debug)]
pub struct Step {
    /// The step size actually taken.
    pub h: Float,
    /// The state after the step (time at component 0).
    pub y: Vec<Float>,
}

/// Clamp a raw step estimate against an optional maximum.
///
/// An unbounded estimate (every governing coefficient zero) is replaced by
/// `hmax` when one is configured, otherwise rejected: an infinite step is
/// never silently accepted. A zero estimate (the tolerance over a
/// coefficient magnitude underflowed) is never clamped upward and fails
/// instead, so the caller cannot loop without making progress.
pub(crate) fn limit_step(h: Float, hmax: Option<Float>) -> Result<Float, Error> {
    if h.is_nan() {
        return Err(Error::StepSizeTooSmall(h));
    }
    if h == Float::INFINITY {
        return hmax.ok_or(Error::DegenerateStepSize(h));
    }
    let h = match hmax {
        Some(hm) => h.min(hm),
        None => h,
    };
    if !(h > 0.0) {
        return Err(Error::StepSizeTooSmall(h));
    }
    Ok(h)
}

/// Take one Taylor step from state `y`, allocating a fresh coefficient jet.
///
/// Semantically identical to [`taylor_step_into`]; prefer that variant inside
/// a loop to reuse the jet allocation. The caller is responsible for
/// validating `order >= 1` and `abs_tol > 0` (the integration loop does this
/// once at entry).
pub fn taylor_step<F, P>(
    f: &F,
    y: &[Float],
    order: usize,
    abs_tol: Float,
    policy: &P,
    hmax: Option<Float>,
) -> Result<Step, Error>
where
    F: Ode,
    P: StepSize,
{
    let mut jet: Vec<Series> = y.iter().map(|&v| Series::constant(v, order)).collect();
    taylor_step_into(f, &mut jet, order, abs_tol, policy, hmax)
}

/// Take one Taylor step using a caller-owned coefficient jet.
///
/// On entry the degree-0 coefficients must hold the current state (use
/// [`Series::reset`] between steps); on return the jet holds the full
/// expansion at the pre-step point. The buffer must not be shared across
/// concurrently running integrations.
pub fn taylor_step_into<F, P>(
    f: &F,
    jet: &mut [Series],
    order: usize,
    abs_tol: Float,
    policy: &P,
    hmax: Option<Float>,
) -> Result<Step, Error>
where
    F: Ode,
    P: StepSize,
{
    taylor_coefficients(f, jet, order)?;
    let h = limit_step(policy.estimate(jet, abs_tol), hmax)?;
    let y = propagate(jet, h);
    if let Some(&bad) = y.iter().find(|v| !v.is_finite()) {
        return Err(Error::NonFiniteState(bad));
    }
    Ok(Step { h, y })
}
