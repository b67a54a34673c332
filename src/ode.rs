//! User-supplied ODE system.

use crate::series::Scalar;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(y). The state convention puts the independent variable
/// (time) at component 0, so the returned derivative must be exactly one
/// there. Any parameters belong on the implementing struct itself.
///
/// The method is generic over [`Scalar`] because the integrator evaluates it
/// both on the plain state and on degree-restricted truncated series while
/// filling Taylor coefficients; keep the body referentially transparent with
/// respect to its input.
///
/// # Example
///
/// ```ignore
/// struct VanDerPol { eps: f64 }
/// impl Ode for VanDerPol {
///     fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T> {
///         let damping = (T::one() - y[1].clone() * y[1].clone()) * y[2].clone();
///         vec![
///             T::one(),
///             y[2].clone(),
///             (damping - y[1].clone()) / T::from_float(self.eps),
///         ]
///     }
/// }
/// ```
pub trait Ode {
    fn ode<T: Scalar>(&self, y: &[T]) -> Vec<T>;
}
