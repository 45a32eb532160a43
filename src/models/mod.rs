//! Model evaluation for the exponential and cosh fit forms.

pub mod model;

pub use model::*;
