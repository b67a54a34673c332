//! Taylor-coefficient recurrence for the solution of y' = f(y).

use crate::{Float, error::Error, ode::Ode, series::Series};

/// Fill coefficients `1..=order` of every series in `jet` in place.
///
/// On entry the degree-0 coefficients must hold the current state and every
/// series must have order at least `order`. Differentiating y' = f(y) shows
/// that coefficient `i` of the solution equals coefficient `i-1` of the
/// expansion of `f(y)` divided by `i`; the loop applies that relation degree
/// by degree, evaluating `f` on views truncated to degree `i-1` so that
/// computing degree `i` only ever reads degrees below it.
///
/// `order == 0` is a no-op; [`crate::solve_ivp`] rejects it up front because
/// a zeroth-order expansion can never advance the state. A coefficient that
/// overflows or turns NaN fails with [`Error::NonFiniteState`] at the degree
/// that produced it, rather than poisoning the rest of the expansion.
pub fn taylor_coefficients<F>(f: &F, jet: &mut [Series], order: usize) -> Result<(), Error>
where
    F: Ode,
{
    let n = jet.len();
    for i in 1..=order {
        let view: Vec<Series> = jet.iter().map(|s| s.truncated(i - 1)).collect();
        let dy = f.ode(&view);
        if dy.len() != n {
            return Err(Error::DimensionMismatch(n, dy.len()));
        }
        for (x, d) in jet.iter_mut().zip(dy.iter()) {
            let c = d.coeff(i - 1) / i as Float;
            if !c.is_finite() {
                return Err(Error::NonFiniteState(c));
            }
            x.set_coeff(i, c);
        }
    }
    Ok(())
}
