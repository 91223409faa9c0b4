//! Maze grids.
//!
//! This module holds the validated grid type and the built-in maps.

mod grid;
pub mod maps;

pub use grid::*;
