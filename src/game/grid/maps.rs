//! Built-in, hand-authored maze maps, one per difficulty.
//!
//! Every map is rectangular, holds exactly one goal, and its goal is
//! reachable from the first empty cell.

use crate::game::types::{Cell, Difficulty};

const E: Cell = Cell::Empty;
const W: Cell = Cell::Wall;
const G: Cell = Cell::Goal;

pub static EASY_MAZE: &[&[Cell]] = &[
    &[E, E, W, E, W],
    &[W, E, E, E, W],
    &[W, W, E, W, W],
    &[W, E, E, E, G],
];

pub static MEDIUM_MAZE: &[&[Cell]] = &[
    &[E, E, W, E, W, E, W],
    &[W, E, E, E, E, E, W],
    &[W, W, W, W, E, W, W],
    &[W, E, E, E, E, E, G],
];

pub static HARD_MAZE: &[&[Cell]] = &[
    &[E, E, W, E, W, E, W, W, W],
    &[W, E, E, E, E, E, E, W, W],
    &[W, W, W, W, E, W, E, E, W],
    &[W, E, E, E, E, E, W, E, G],
];

/// Static table for `difficulty`.
pub fn table_for(difficulty: Difficulty) -> &'static [&'static [Cell]] {
    match difficulty {
        Difficulty::Easy => EASY_MAZE,
        Difficulty::Medium => MEDIUM_MAZE,
        Difficulty::Hard => HARD_MAZE,
    }
}
