//! Model evaluation for the exponential and cosh correlator forms.
//!
//! The fitter relies on two primitive operations:
//! - predict `f(n)` given `(A, M)` (for residuals)
//! - the analytic gradient `(df/dA, df/dM)` (for the Jacobian)
//!
//! These are implemented here for each model kind. The cosh form is centered
//! on `T/2`, reflecting a source-sink-symmetric periodic correlator.

use crate::domain::ModelKind;

/// Predict `f(n)` for the given model kind.
///
/// `n` is the absolute time index (measured from the source at 0), `t_size`
/// the temporal extent of the lattice.
pub fn predict(model: ModelKind, n: f64, a: f64, m: f64, t_size: usize) -> f64 {
    match model {
        ModelKind::Exponential => a * (-m * n).exp(),
        ModelKind::HyperbolicCosine => {
            let x = m * (n - t_size as f64 / 2.0);
            a * x.cosh()
        }
    }
}

/// Analytic gradient `(df/dA, df/dM)` for the given model kind.
pub fn gradient(model: ModelKind, n: f64, a: f64, m: f64, t_size: usize) -> (f64, f64) {
    match model {
        ModelKind::Exponential => {
            let g = (-m * n).exp();
            (g, -a * n * g)
        }
        ModelKind::HyperbolicCosine => {
            let h = n - t_size as f64 / 2.0;
            let x = m * h;
            (x.cosh(), a * h * x.sinh())
        }
    }
}
