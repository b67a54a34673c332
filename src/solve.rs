//! Integration loop and its configuration.

use bon::Builder;

use crate::{
    Float,
    error::Error,
    ode::Ode,
    propagate::propagate,
    recurrence::taylor_coefficients,
    series::Series,
    solution::Solution,
    status::Status,
    step::limit_step,
    stepsize::{DefaultStepSize, StepSize},
};

#[derive(Builder)]
/// Options for [`solve_ivp`].
///
/// The single loop covers every operating mode: bounded or unbounded step
/// counts, with or without step history, default or custom step policy.
pub struct Options<'a, P: StepSize = DefaultStepSize> {
    /// Taylor expansion order (maximum retained degree). Must be >= 1.
    #[builder(default = 20)]
    pub order: usize,
    /// Absolute tolerance on the local truncation error.
    #[builder(default = 1e-10)]
    pub abs_tol: Float,
    /// Stop after this many accepted steps even if `t_max` has not been
    /// reached; the returned status is then [`Status::MaxStepsReached`].
    /// This is a deliberate finite-horizon mode, not only a safety valve.
    pub max_steps: Option<usize>,
    /// Upper bound on the step size. Also the fallback step when the
    /// estimator is unbounded (all governing coefficients zero); without it
    /// such a step fails with [`Error::DegenerateStepSize`].
    pub max_step: Option<Float>,
    /// Record the initial state and every accepted step in the solution.
    #[builder(default = true)]
    pub save_steps: bool,
    /// Custom step-size policy; defaults to [`DefaultStepSize`].
    pub step_policy: Option<&'a P>,
}

/// Integrate `y' = f(y)` from `y0` until the time component reaches `t_max`.
///
/// Component 0 of the state is the independent variable; `f` must return a
/// derivative of exactly one for it. Each iteration builds the Taylor
/// expansion at the current point, selects a step from the trailing
/// coefficients, and advances by Horner evaluation. The working coefficient
/// jet is allocated once and reset in place between steps. The final step is
/// shortened to land exactly on `t_max`.
///
/// All configuration problems are collected and reported together before any
/// step is attempted; runtime failures abort the run at the failing step.
pub fn solve_ivp<F, P>(
    f: &F,
    y0: &[Float],
    t_max: Float,
    options: Options<'_, P>,
) -> Result<Solution, Vec<Error>>
where
    F: Ode,
    P: StepSize,
{
    // --- Input Validation ---
    let mut errors = Vec::new();

    let order = options.order;
    if order < 1 {
        errors.push(Error::OrderMustBePositive(order));
    }

    let abs_tol = options.abs_tol;
    if !(abs_tol > 0.0) || !abs_tol.is_finite() {
        errors.push(Error::AbsTolMustBePositive(abs_tol));
    }

    if let Some(hmax) = options.max_step {
        if !(hmax > 0.0) || !hmax.is_finite() {
            errors.push(Error::MaxStepMustBePositive(hmax));
        }
    }

    if let Some(kmax) = options.max_steps {
        if kmax == 0 {
            errors.push(Error::MaxStepsMustBePositive(kmax));
        }
    }

    if y0.is_empty() {
        errors.push(Error::EmptyState);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // --- Declarations ---
    let default_policy = DefaultStepSize;
    let mut y = y0.to_vec();
    let mut jet: Vec<Series> = y.iter().map(|&v| Series::constant(v, order)).collect();
    let mut h = 0.0;
    let mut nstep = 0;
    let mut nfev = 0;
    let mut status = Status::Success;

    let mut t_log = Vec::new();
    let mut y_log = Vec::new();
    if options.save_steps {
        let capacity = options.max_steps.map_or(16, |k| k + 1);
        t_log.reserve(capacity);
        y_log.reserve(capacity);
        t_log.push(y[0]);
        y_log.push(y.clone());
    }

    // --- Main integration loop ---
    while y[0] < t_max {
        if let Some(kmax) = options.max_steps {
            if nstep >= kmax {
                status = Status::MaxStepsReached;
                break;
            }
        }

        for (series, &value) in jet.iter_mut().zip(y.iter()) {
            series.reset(value);
        }
        taylor_coefficients(f, &mut jet, order).map_err(|e| vec![e])?;
        nfev += order;

        let estimate = match options.step_policy {
            Some(policy) => policy.estimate(&jet, abs_tol),
            None => default_policy.estimate(&jet, abs_tol),
        };
        h = limit_step(estimate, options.max_step).map_err(|e| vec![e])?;

        // Shorten the last step so the run lands exactly on t_max.
        let t_prev = y[0];
        let remaining = t_max - t_prev;
        let last = h >= remaining;
        if last {
            h = remaining;
        }

        y = propagate(&jet, h);
        if last {
            y[0] = t_max;
        }
        if let Some(&bad) = y.iter().find(|v| !v.is_finite()) {
            return Err(vec![Error::NonFiniteState(bad)]);
        }
        // A positive h narrower than one ulp of t leaves the time component
        // unchanged; accepting it would spin forever without progress.
        if y[0] <= t_prev {
            return Err(vec![Error::StepSizeTooSmall(h)]);
        }
        nstep += 1;

        if options.save_steps {
            t_log.push(y[0]);
            y_log.push(y.clone());
        }
    }

    Ok(Solution {
        x: y[0],
        y,
        h,
        t: t_log,
        yout: y_log,
        nstep,
        nfev,
        status,
    })
}
