//! `fit-mqq` library crate.
//!
//! The binary (`fit-mqq`) is a thin wrapper around this library so that:
//!
//! - the fit/aggregation logic is testable without spawning processes
//! - modules stay easy to navigate (I/O, models, math, reporting are separate)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
