//! Step-size selection from the tail of the Taylor expansion.

use crate::{Float, series::Series};

/// Step-size policy: map a completed coefficient jet and an absolute
/// tolerance to a common step for the whole system.
///
/// The default implementation is [`DefaultStepSize`]; pass a custom policy
/// through [`crate::Options`] to override it.
pub trait StepSize {
    fn estimate(&self, jet: &[Series], abs_tol: Float) -> Float;
}

/// Step bound for one component: the minimum over the last two retained
/// degrees `k` of `(abs_tol / |c_k|)^(1/k)`.
///
/// Taking both degrees guards against a spuriously tiny highest coefficient
/// suggesting a misleadingly large step. A zero coefficient yields an
/// infinite candidate; if every governing coefficient vanishes the result is
/// infinite and the caller must clamp or reject it. Degree 0 carries no
/// truncation information and is skipped, so a first-order series is judged
/// by its linear coefficient alone.
pub fn component_step(series: &Series, abs_tol: Float) -> Float {
    let order = series.order();
    let mut h = Float::INFINITY;
    for k in [order.saturating_sub(1), order] {
        if k == 0 {
            continue;
        }
        let magnitude = series.coeff(k).abs();
        let candidate = (abs_tol / magnitude).powf(1.0 / k as Float);
        h = h.min(candidate);
    }
    h
}

/// System-wide estimator: the minimum of [`component_step`] over all
/// components. All components advance together, so the most restrictive one
/// governs the common step.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStepSize;

impl StepSize for DefaultStepSize {
    fn estimate(&self, jet: &[Series], abs_tol: Float) -> Float {
        jet.iter()
            .map(|s| component_step(s, abs_tol))
            .fold(Float::INFINITY, Float::min)
    }
}
