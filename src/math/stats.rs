//! Ensemble statistics.
//!
//! The summary reports, for each fitted quantity, the arithmetic mean across
//! gauge configurations and a bias-corrected standard deviation:
//!
//! ```text
//! stddev = sqrt( var_pop * (n-1) / n ),   var_pop = Σ (x - mean)^2 / n
//! ```
//!
//! i.e. the population variance rescaled by the jackknife-style factor
//! `(n-1)/n`. For a single configuration the stddev is exactly 0.

/// Arithmetic mean. The slice must be non-empty.
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Bias-corrected ensemble standard deviation. The slice must be non-empty.
pub fn ensemble_stddev(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mu = mean(xs);
    let var_pop = xs.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / n;
    (var_pop * (n - 1.0) / n).sqrt()
}
