//! Game entities module.
//!
//! This module organizes the equation entity and its generator.

pub mod equation;

pub use equation::*;
