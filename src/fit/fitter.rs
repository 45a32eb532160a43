//! Fit one correlator record over the fit window.
//!
//! Given a record's `(value, error)` rows restricted to `[tmin, tmax)`, we
//! minimize the weighted sum of squared residuals
//!
//! ```text
//! Σ [(f(n_i) - value_i) / error_i]^2
//! ```
//!
//! over `(A, M)` from the fixed initial guess `(0.01, 1.0)`, and package the
//! fitted parameters plus the minimized objective as a [`FitResult`].
//!
//! Non-convergence is deliberately not an error: the best point seen is
//! recorded as-is, and the summary reports whatever the minimizer returned.

use crate::domain::{FitResult, FitWindow, ModelKind};
use crate::io::CorrelatorRecord;
use crate::math::{LmOptions, fit_two_param};
use crate::models;

/// Initial guess `(A, M)` for every fit.
const INIT_PARAMS: [f64; 2] = [0.01, 1.0];

/// Fit a single correlator record.
///
/// The window must already be validated against `t_size`, which must equal
/// the record's temporal extent.
pub fn fit_correlator(
    record: &CorrelatorRecord,
    window: FitWindow,
    model: ModelKind,
    t_size: usize,
) -> FitResult {
    let sites = window.sites();
    let (values, errors) = record.window(window);

    let fit = fit_two_param(
        |n, a, m| models::predict(model, n, a, m, t_size),
        |n, a, m| models::gradient(model, n, a, m, t_size),
        &sites,
        values,
        errors,
        INIT_PARAMS,
        &LmOptions::default(),
    );

    FitResult {
        amplitude: fit.params[0],
        mass: fit.params[1],
        chisq: fit.objective,
    }
}
