//! Per-file fitting and ensemble aggregation.

pub mod ensemble;
pub mod fitter;

pub use ensemble::*;
pub use fitter::*;
