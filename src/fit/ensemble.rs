//! Aggregate per-file fit results into an ensemble summary.
//!
//! Degrees of freedom: `(# of fit points) - (# of parameters) - 1`. The
//! window invariant guarantees `df >= 0`; a width-3 window yields `df = 0`
//! and an infinite reduced chi-square.

use crate::domain::{EnsembleSummary, FitResult, FitWindow, Stat};
use crate::math::{ensemble_stddev, mean};

fn stat_of(xs: &[f64]) -> Stat {
    Stat {
        mean: mean(xs),
        stddev: ensemble_stddev(xs),
    }
}

/// Compute the ensemble mean ± stddev of amplitude, mass, and reduced
/// chi-square over all per-file results. `results` must be non-empty.
pub fn summarize(results: &[FitResult], window: FitWindow) -> EnsembleSummary {
    let df = window.degrees_of_freedom();

    let amplitudes: Vec<f64> = results.iter().map(|r| r.amplitude).collect();
    let masses: Vec<f64> = results.iter().map(|r| r.mass).collect();
    let reduced: Vec<f64> = results.iter().map(|r| r.chisq / df as f64).collect();

    EnsembleSummary {
        amplitude: stat_of(&amplitudes),
        mass: stat_of(&masses),
        chisq_per_df: stat_of(&reduced),
        df,
        n_files: results.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitWindow;

    fn result(a: f64, m: f64, chisq: f64) -> FitResult {
        FitResult {
            amplitude: a,
            mass: m,
            chisq,
        }
    }

    #[test]
    fn single_file_has_zero_stddev() {
        let window = FitWindow::validate(2, 10, 16).unwrap();
        let summary = summarize(&[result(2.0, 0.3, 1.5)], window);

        assert_eq!(summary.n_files, 1);
        assert_eq!(summary.df, 5);
        assert!((summary.mass.mean - 0.3).abs() < 1e-15);
        assert_eq!(summary.amplitude.stddev, 0.0);
        assert_eq!(summary.mass.stddev, 0.0);
        assert_eq!(summary.chisq_per_df.stddev, 0.0);
    }

    #[test]
    fn identical_files_match_single_file_mean() {
        let window = FitWindow::validate(2, 10, 16).unwrap();
        let one = summarize(&[result(2.0, 0.25, 1.25)], window);
        let many = summarize(&[result(2.0, 0.25, 1.25); 5], window);

        assert_eq!(many.n_files, 5);
        assert_eq!(many.mass.mean, one.mass.mean);
        assert_eq!(many.amplitude.mean, one.amplitude.mean);
        assert_eq!(many.chisq_per_df.mean, one.chisq_per_df.mean);
        assert_eq!(many.mass.stddev, 0.0);
        assert_eq!(many.amplitude.stddev, 0.0);
        assert_eq!(many.chisq_per_df.stddev, 0.0);
    }

    #[test]
    fn chisq_is_divided_by_df_before_aggregation() {
        let window = FitWindow::validate(2, 10, 16).unwrap(); // df = 5
        let summary = summarize(&[result(1.0, 0.5, 10.0), result(1.0, 0.5, 20.0)], window);

        assert!((summary.chisq_per_df.mean - 3.0).abs() < 1e-15);
        // stddev = sqrt(var_pop * (n-1)/n) = sqrt(1.0 * 0.5) for [2, 4].
        assert!((summary.chisq_per_df.stddev - 0.5f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn width_three_window_yields_infinite_reduced_chisq() {
        let window = FitWindow::validate(2, 5, 16).unwrap(); // df = 0
        let summary = summarize(&[result(1.0, 0.5, 1.0)], window);
        assert_eq!(summary.df, 0);
        assert!(summary.chisq_per_df.mean.is_infinite());
    }
}
