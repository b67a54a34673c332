//! Horner evaluation of a completed coefficient jet.

use crate::{Float, series::Series};

/// Evaluate every series in `jet` at step `h`, producing the next state.
///
/// Uses Horner's method from the highest retained degree down, avoiding
/// explicit powers of `h`. Component 0 is the independent variable, linear by
/// construction, and is advanced as `c0 + h` directly. Pure: the jet is not
/// modified, and `h == 0` returns the degree-0 coefficients exactly.
pub fn propagate(jet: &[Series], h: Float) -> Vec<Float> {
    jet.iter()
        .enumerate()
        .map(|(j, series)| {
            if j == 0 {
                return series.coeff(0) + h;
            }
            let order = series.order();
            let mut acc = series.coeff(order);
            for k in (1..=order).rev() {
                acc = series.coeff(k - 1) + acc * h;
            }
            acc
        })
        .collect()
}
