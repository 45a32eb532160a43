//! Mathematical utilities: weighted nonlinear least squares and ensemble
//! statistics.

pub mod lm;
pub mod stats;

pub use lm::*;
pub use stats::*;
