//! Command-line parsing for the correlator mass fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting/math code: flags are collected here and converted into a
//! [`FitConfig`](crate::domain::FitConfig) by the app layer, where the fit
//! range is validated.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::ModelKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fit-mqq", version, about = "Fit hadron masses from lattice correlator data")]
pub struct Cli {
    /// Temporal size of the lattice.
    #[arg(short = 't', long = "tsize")]
    pub tsize: usize,

    /// Lattice cutoff (GeV); masses are also reported in MeV via M * cutoff * 1000.
    #[arg(short = 'c', long = "cutoff")]
    pub cutoff: f64,

    /// Fit function: exp or csh.
    #[arg(long = "ftype", value_enum)]
    pub ftype: ModelKind,

    /// Fit range [MIN, MAX).
    ///
    /// Parsed as signed so that a negative MIN reaches range validation and is
    /// reported with the standard range message instead of a parse error.
    #[arg(
        short = 'r',
        long = "range",
        num_args = 2,
        value_names = ["MIN", "MAX"],
        allow_negative_numbers = true
    )]
    pub range: Vec<i64>,

    /// Correlator files to fit (one per gauge configuration).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
