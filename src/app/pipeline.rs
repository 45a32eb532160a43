//! The core fit pipeline:
//!
//! load correlator -> window -> weighted LM fit -> ensemble aggregation
//!
//! Per-file fits are independent and contribute order-independently to the
//! summary, so they run in parallel. A format error on any file aborts the
//! whole run with no partial output.

use rayon::prelude::*;

use crate::domain::{EnsembleSummary, FitConfig, FitResult};
use crate::error::AppError;
use crate::fit::{fit_correlator, summarize};
use crate::io::read_correlator;

/// Execute the full pipeline and return the ensemble summary.
pub fn run_fit(config: &FitConfig) -> Result<EnsembleSummary, AppError> {
    let results: Vec<FitResult> = config
        .files
        .par_iter()
        .map(|path| {
            let record = read_correlator(path, config.t_size)?;
            Ok(fit_correlator(
                &record,
                config.window,
                config.model,
                config.t_size,
            ))
        })
        .collect::<Result<_, AppError>>()?;

    Ok(summarize(&results, config.window))
}
