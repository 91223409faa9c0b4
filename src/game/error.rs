//! Typed errors for the game layer.

use thiserror::Error;

/// Reasons a set of rows cannot form a maze grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,

    #[error("row {row} has width {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid must contain exactly one goal, found {found}")]
    GoalCount { found: usize },

    #[error("grid has no empty cell to spawn on")]
    NoSpawn,
}

/// A wire token that does not name a known value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("unknown direction '{0}'")]
    Direction(String),
}
