//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - validates the fit window (before any file is touched)
//! - runs the per-file fit pipeline
//! - prints the ensemble summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{FitConfig, FitWindow};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fit-mqq` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = fit_config_from_cli(&cli)?;

    let summary = pipeline::run_fit(&config)?;
    print!(
        "{}",
        crate::report::format_summary(&summary, config.window, config.cutoff)
    );

    Ok(())
}

/// Convert parsed flags into a validated [`FitConfig`].
///
/// Range validation happens here so an invalid window fails before any file
/// I/O, with exit code 1 and the standard message.
pub fn fit_config_from_cli(cli: &Cli) -> Result<FitConfig, AppError> {
    // clap enforces `num_args = 2`, so both bounds are present.
    let window = FitWindow::validate(cli.range[0], cli.range[1], cli.tsize)?;

    Ok(FitConfig {
        t_size: cli.tsize,
        cutoff: cli.cutoff,
        model: cli.ftype,
        window,
        files: cli.files.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn cli(range: [&str; 2]) -> Cli {
        Cli::parse_from([
            "fit-mqq", "-t", "16", "-c", "2.1", "--ftype", "exp", "-r", range[0], range[1],
            "a.bin",
        ])
    }

    #[test]
    fn config_carries_validated_window() {
        let config = fit_config_from_cli(&cli(["2", "10"])).unwrap();
        assert_eq!(config.t_size, 16);
        assert_eq!(config.model, ModelKind::Exponential);
        assert_eq!(config.window.tmin(), 2);
        assert_eq!(config.window.tmax(), 10);
        assert_eq!(config.files.len(), 1);
    }

    #[test]
    fn invalid_ranges_fail_before_any_io() {
        // The referenced file does not exist; validation must fail first.
        for range in [["10", "2"], ["-1", "10"], ["2", "17"]] {
            let err = fit_config_from_cli(&cli(range)).unwrap_err();
            assert_eq!(err.exit_code(), 1);
            assert_eq!(err.to_string(), "Please check the range for fit!");
        }
    }
}
