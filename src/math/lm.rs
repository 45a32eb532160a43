//! Weighted Levenberg–Marquardt minimization for two-parameter models.
//!
//! In this project we repeatedly solve small nonlinear regression problems of
//! the form:
//!
//! ```text
//! minimize Σ [(f(x_i; p) - y_i) / e_i]^2   over p = (p0, p1)
//! ```
//!
//! Implementation choices:
//! - Analytic Jacobians supplied by the caller (our models are cheap to
//!   differentiate), so no finite-difference noise.
//! - Classic damped normal equations: solve `(JᵀJ + λ·diag(JᵀJ)) δ = -Jᵀr`,
//!   accept the step only if the cost decreases, otherwise raise λ.
//! - The parameter dimension is fixed at 2, so the linear solve is a
//!   `Matrix2` LU via nalgebra.

use nalgebra::{Matrix2, Vector2};

/// Tuning knobs for the minimizer.
#[derive(Debug, Clone, Copy)]
pub struct LmOptions {
    pub max_iters: usize,
    /// Relative cost-decrease threshold for convergence.
    pub cost_tol: f64,
    /// Step-norm threshold for convergence.
    pub step_tol: f64,
    pub lambda_init: f64,
}

impl Default for LmOptions {
    fn default() -> Self {
        Self {
            max_iters: 200,
            cost_tol: 1e-14,
            step_tol: 1e-14,
            lambda_init: 1e-3,
        }
    }
}

/// Minimizer output.
///
/// `converged` is diagnostic only: callers report `params`/`objective` as-is
/// even when the minimizer stopped on the iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct LmFit {
    pub params: [f64; 2],
    /// Weighted sum of squared residuals at `params`.
    pub objective: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Minimize the weighted sum of squared residuals of `f` over `(p0, p1)`.
///
/// - `f(x, p0, p1)` evaluates the model at one site
/// - `grad(x, p0, p1)` returns `(df/dp0, df/dp1)` at one site
/// - `errs` are the per-point statistical errors used as residual weights
///
/// `xs`, `ys`, and `errs` must have equal, nonzero length.
pub fn fit_two_param<F, G>(
    f: F,
    grad: G,
    xs: &[f64],
    ys: &[f64],
    errs: &[f64],
    init: [f64; 2],
    opts: &LmOptions,
) -> LmFit
where
    F: Fn(f64, f64, f64) -> f64,
    G: Fn(f64, f64, f64) -> (f64, f64),
{
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert_eq!(xs.len(), errs.len());

    let cost_of = |p: [f64; 2]| -> f64 {
        let mut c = 0.0;
        for i in 0..xs.len() {
            let r = (f(xs[i], p[0], p[1]) - ys[i]) / errs[i];
            c += r * r;
        }
        c
    };

    let mut p = init;
    let mut cost = cost_of(p);
    let mut lambda = opts.lambda_init;
    let mut converged = false;
    let mut iterations = 0;

    if !cost.is_finite() {
        return LmFit {
            params: p,
            objective: cost,
            iterations,
            converged,
        };
    }

    for iter in 0..opts.max_iters {
        iterations = iter + 1;

        // Assemble JᵀJ and Jᵀr at the current point.
        let mut jtj = Matrix2::<f64>::zeros();
        let mut jtr = Vector2::<f64>::zeros();
        for i in 0..xs.len() {
            let e = errs[i];
            let (da, dm) = grad(xs[i], p[0], p[1]);
            let j0 = da / e;
            let j1 = dm / e;
            let r = (f(xs[i], p[0], p[1]) - ys[i]) / e;

            jtj[(0, 0)] += j0 * j0;
            jtj[(0, 1)] += j0 * j1;
            jtj[(1, 1)] += j1 * j1;
            jtr[0] += j0 * r;
            jtr[1] += j1 * r;
        }
        jtj[(1, 0)] = jtj[(0, 1)];

        if !(jtj.iter().all(|v: &f64| v.is_finite()) && jtr.iter().all(|v: &f64| v.is_finite())) {
            break;
        }

        // Try increasingly damped steps until one goes downhill.
        let mut accepted = None;
        for _ in 0..16 {
            let damped = Matrix2::new(
                jtj[(0, 0)] * (1.0 + lambda),
                jtj[(0, 1)],
                jtj[(1, 0)],
                jtj[(1, 1)] * (1.0 + lambda),
            );
            let Some(step) = damped.lu().solve(&(-jtr)) else {
                lambda *= 10.0;
                continue;
            };

            let trial = [p[0] + step[0], p[1] + step[1]];
            let trial_cost = cost_of(trial);
            if trial_cost.is_finite() && trial_cost < cost {
                accepted = Some((trial, trial_cost, step.norm()));
                break;
            }
            lambda *= 10.0;
        }

        let Some((trial, trial_cost, step_norm)) = accepted else {
            // No damping level improved the cost: a stationary point or the
            // numerical floor for this dataset.
            converged = jtr.norm() <= 1e-8 * (1.0 + cost);
            break;
        };

        let drop = cost - trial_cost;
        p = trial;
        cost = trial_cost;
        lambda = (lambda * 0.1).max(1e-12);

        let p_norm = (p[0] * p[0] + p[1] * p[1]).sqrt();
        if drop <= opts.cost_tol * (cost + opts.cost_tol)
            || step_norm <= opts.step_tol * (1.0 + p_norm)
        {
            converged = true;
            break;
        }
    }

    LmFit {
        params: p,
        objective: cost,
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp_model(x: f64, a: f64, m: f64) -> f64 {
        a * (-m * x).exp()
    }

    fn exp_grad(x: f64, a: f64, m: f64) -> (f64, f64) {
        let g = (-m * x).exp();
        (g, -a * x * g)
    }

    #[test]
    fn recovers_exponential_parameters_from_clean_data() {
        let xs: Vec<f64> = (0..12).map(|n| n as f64).collect();
        let errs = vec![1.0; xs.len()];

        for (a, m) in [(2.0, 0.3), (0.5, 0.1), (1.5, 0.8)] {
            let ys: Vec<f64> = xs.iter().map(|&x| exp_model(x, a, m)).collect();
            let fit = fit_two_param(
                exp_model,
                exp_grad,
                &xs,
                &ys,
                &errs,
                [0.01, 1.0],
                &LmOptions::default(),
            );

            assert!(
                (fit.params[0] - a).abs() < 1e-8,
                "A: {} vs {a}",
                fit.params[0]
            );
            assert!(
                (fit.params[1] - m).abs() < 1e-8,
                "M: {} vs {m}",
                fit.params[1]
            );
            assert!(fit.objective < 1e-16);
        }
    }

    #[test]
    fn objective_is_weighted_by_errors() {
        // One bad point with a huge error bar should barely move the fit.
        let xs: Vec<f64> = (0..10).map(|n| n as f64).collect();
        let mut ys: Vec<f64> = xs.iter().map(|&x| exp_model(x, 1.2, 0.25)).collect();
        let mut errs = vec![0.01; xs.len()];
        ys[5] += 50.0;
        errs[5] = 1e6;

        let fit = fit_two_param(
            exp_model,
            exp_grad,
            &xs,
            &ys,
            &errs,
            [0.01, 1.0],
            &LmOptions::default(),
        );
        assert!((fit.params[0] - 1.2).abs() < 1e-6);
        assert!((fit.params[1] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn non_finite_start_is_reported_not_panicked() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [f64::NAN, 1.0, 1.0];
        let errs = [1.0, 1.0, 1.0];

        let fit = fit_two_param(
            exp_model,
            exp_grad,
            &xs,
            &ys,
            &errs,
            [0.01, 1.0],
            &LmOptions::default(),
        );
        assert!(!fit.converged);
        assert_eq!(fit.params, [0.01, 1.0]);
    }
}
