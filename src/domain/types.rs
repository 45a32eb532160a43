//! Shared domain types.
//!
//! These types are intentionally kept lightweight:
//!
//! - used in-memory during fitting
//! - small enough to copy freely between the pipeline stages

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::AppError;

/// Which functional form to fit to the correlator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// `f(n) = A * exp(-M * n)` — plain exponential decay.
    #[value(name = "exp")]
    Exponential,
    /// `f(n) = A * cosh(M * (n - T/2))` — source-sink-symmetric form for
    /// periodic boundary conditions.
    #[value(name = "csh")]
    HyperbolicCosine,
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Exponential => "exp",
            ModelKind::HyperbolicCosine => "csh",
        }
    }
}

/// Inclusive-exclusive fit window `[tmin, tmax)` over time indices.
///
/// Invariants (enforced by [`FitWindow::validate`] before any file I/O):
/// - `0 <= tmin < tmax <= t_size`
/// - `tmax - tmin >= 3` (two free parameters plus at least one residual
///   degree of freedom)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitWindow {
    tmin: usize,
    tmax: usize,
}

/// Minimum number of fit points: 2 free parameters + 1.
const MIN_WINDOW_LEN: i64 = 3;

impl FitWindow {
    /// Validate a raw `(tmin, tmax)` pair against the temporal extent.
    ///
    /// The inputs are signed because a negative `tmin` must be reported as a
    /// range error, not rejected earlier by argument parsing.
    pub fn validate(tmin: i64, tmax: i64, t_size: usize) -> Result<FitWindow, AppError> {
        if tmin >= tmax
            || tmin < 0
            || tmax > t_size as i64
            || tmax - tmin < MIN_WINDOW_LEN
        {
            return Err(AppError::new(1, "Please check the range for fit!"));
        }
        Ok(FitWindow {
            tmin: tmin as usize,
            tmax: tmax as usize,
        })
    }

    pub fn tmin(self) -> usize {
        self.tmin
    }

    pub fn tmax(self) -> usize {
        self.tmax
    }

    /// Number of fit points in the window.
    pub fn len(self) -> usize {
        self.tmax - self.tmin
    }

    /// Always false for a validated window (minimum width 3); present only to
    /// pair with [`FitWindow::len`].
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Time sites `tmin..tmax-1` as floats, measured from time origin 0.
    pub fn sites(self) -> Vec<f64> {
        (self.tmin..self.tmax).map(|n| n as f64).collect()
    }

    /// Residual degrees of freedom: points minus parameters minus one.
    pub fn degrees_of_freedom(self) -> usize {
        self.len() - 2 - 1
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags; see the redesign note in the docs for why
/// the pipeline takes an explicit config instead of reading global state.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Temporal extent of the lattice (T).
    pub t_size: usize,
    /// Lattice cutoff in GeV; fitted masses are also reported in MeV via
    /// `M * cutoff * 1000`.
    pub cutoff: f64,
    pub model: ModelKind,
    pub window: FitWindow,
    pub files: Vec<PathBuf>,
}

/// Per-file fit output.
#[derive(Debug, Clone, Copy)]
pub struct FitResult {
    pub amplitude: f64,
    pub mass: f64,
    /// Minimized weighted sum of squared residuals.
    pub chisq: f64,
}

/// Mean and bias-corrected standard deviation of one summary quantity.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub mean: f64,
    pub stddev: f64,
}

/// Ensemble-level summary across all input files.
#[derive(Debug, Clone, Copy)]
pub struct EnsembleSummary {
    pub amplitude: Stat,
    pub mass: Stat,
    pub chisq_per_df: Stat,
    pub df: usize,
    pub n_files: usize,
}
