//! Terminal output formatting.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized
//!
//! The summary is four `##`-prefixed lines: the fit range, the mass in
//! lattice units, the mass converted to MeV via `M * cutoff * 1000`, and the
//! reduced chi-square, each as `mean ± stddev`.

use crate::domain::{EnsembleSummary, FitWindow};

/// MeV per GeV; the cutoff is supplied in GeV.
const MEV_PER_GEV: f64 = 1000.0;

/// Format the ensemble summary block.
pub fn format_summary(summary: &EnsembleSummary, window: FitWindow, cutoff: f64) -> String {
    let scale = cutoff * MEV_PER_GEV;

    let mut out = String::new();
    out.push_str(&format!(
        "##  Fit range: [{}, {}]\n",
        window.tmin(),
        window.tmax()
    ));
    out.push_str(&format!(
        "##  M(LU)  = {} \u{b1} {}\n",
        summary.mass.mean, summary.mass.stddev
    ));
    out.push_str(&format!(
        "##  M      = {} \u{b1} {}\n",
        summary.mass.mean * scale,
        summary.mass.stddev * scale
    ));
    out.push_str(&format!(
        "##  \u{3c7}^2/df = {} \u{b1} {}\n",
        summary.chisq_per_df.mean, summary.chisq_per_df.stddev
    ));

    out
}
