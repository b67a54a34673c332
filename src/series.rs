//! Truncated power series over a coefficient buffer.
//!
//! Convention: `coeffs[k] = f^(k)(t0) / k!` (scaled Taylor coefficients).
//! A series of order `p` stores `p + 1` coefficients. Arithmetic between
//! series of different orders pads the shorter operand with zeros, treating
//! it as an exact polynomial; this is what lets a lifted constant broadcast
//! across any working order.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::Float;

/// Arithmetic capability set shared by [`Float`] and [`Series`].
///
/// The right-hand side of an ODE is written once, generically over this
/// trait, and the integrator evaluates it on plain numbers and on
/// degree-restricted series views alike.
pub trait Scalar:
    Clone
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    /// Lift a plain floating-point constant into the scalar type.
    fn from_float(value: Float) -> Self;
}

impl Scalar for Float {
    #[inline]
    fn from_float(value: Float) -> Self {
        value
    }
}

/// Truncated power series with heap-backed coefficient storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    coeffs: Vec<Float>,
}

impl Series {
    /// Series of the given order whose constant term is `value` and whose
    /// higher coefficients are zero.
    pub fn constant(value: Float, order: usize) -> Self {
        let mut coeffs = vec![0.0; order + 1];
        coeffs[0] = value;
        Series { coeffs }
    }

    /// Series from raw coefficients (`coeffs[k]` multiplies `h^k`).
    ///
    /// An empty vector yields the zero series of order 0.
    pub fn from_coeffs(coeffs: Vec<Float>) -> Self {
        if coeffs.is_empty() {
            return Series::zero();
        }
        Series { coeffs }
    }

    /// Maximum retained degree.
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of degree `k`; zero beyond the stored order.
    #[inline]
    pub fn coeff(&self, k: usize) -> Float {
        self.coeffs.get(k).copied().unwrap_or(0.0)
    }

    /// Overwrite the coefficient of degree `k`.
    ///
    /// # Panics
    /// Panics if `k` exceeds the stored order.
    #[inline]
    pub fn set_coeff(&mut self, k: usize, value: Float) {
        self.coeffs[k] = value;
    }

    /// Restriction to a lower order: a copy keeping coefficients `0..=order`.
    ///
    /// Requesting an order at or above the stored one returns a full copy.
    pub fn truncated(&self, order: usize) -> Series {
        let end = order.min(self.order());
        Series {
            coeffs: self.coeffs[..=end].to_vec(),
        }
    }

    /// Reset in place: constant term `value`, all higher coefficients zero.
    ///
    /// Keeps the allocated buffer, for reuse across steps.
    pub fn reset(&mut self, value: Float) {
        for c in &mut self.coeffs {
            *c = 0.0;
        }
        self.coeffs[0] = value;
    }
}

impl Add for Series {
    type Output = Series;

    fn add(self, rhs: Series) -> Series {
        let order = self.order().max(rhs.order());
        let coeffs = (0..=order).map(|k| self.coeff(k) + rhs.coeff(k)).collect();
        Series { coeffs }
    }
}

impl Sub for Series {
    type Output = Series;

    fn sub(self, rhs: Series) -> Series {
        let order = self.order().max(rhs.order());
        let coeffs = (0..=order).map(|k| self.coeff(k) - rhs.coeff(k)).collect();
        Series { coeffs }
    }
}

impl Neg for Series {
    type Output = Series;

    fn neg(mut self) -> Series {
        for c in &mut self.coeffs {
            *c = -*c;
        }
        self
    }
}

impl Mul for Series {
    type Output = Series;

    /// Cauchy product truncated to the larger operand order:
    /// `c[k] = sum_{j=0}^{k} a[j] * b[k-j]`.
    fn mul(self, rhs: Series) -> Series {
        let order = self.order().max(rhs.order());
        let mut coeffs = vec![0.0; order + 1];
        for (k, c) in coeffs.iter_mut().enumerate() {
            let mut sum = 0.0;
            for j in 0..=k {
                sum += self.coeff(j) * rhs.coeff(k - j);
            }
            *c = sum;
        }
        Series { coeffs }
    }
}

impl Div for Series {
    type Output = Series;

    /// Recursive series division:
    /// `c[k] = (a[k] - sum_{j=1}^{k} b[j] * c[k-j]) / b[0]`.
    ///
    /// The divisor must have a nonzero constant term; a zero constant term
    /// propagates non-finite coefficients, as plain float division would.
    fn div(self, rhs: Series) -> Series {
        let order = self.order().max(rhs.order());
        let inv_b0 = 1.0 / rhs.coeff(0);
        let mut coeffs = vec![0.0; order + 1];
        for k in 0..=order {
            let mut sum = self.coeff(k);
            for j in 1..=k {
                sum -= rhs.coeff(j) * coeffs[k - j];
            }
            coeffs[k] = sum * inv_b0;
        }
        Series { coeffs }
    }
}

impl Zero for Series {
    fn zero() -> Series {
        Series::constant(0.0, 0)
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }
}

impl One for Series {
    fn one() -> Series {
        Series::constant(1.0, 0)
    }
}

impl Scalar for Series {
    #[inline]
    fn from_float(value: Float) -> Self {
        Series::constant(value, 0)
    }
}
