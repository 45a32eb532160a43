//! Input helpers.
//!
//! - binary correlator loading + size validation (`correlator`)

pub mod correlator;

pub use correlator::*;
