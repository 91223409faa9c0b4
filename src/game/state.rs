use serde::{Serialize, Deserialize};

use crate::game::entities::Equation;
use crate::game::grid::MazeGrid;
use crate::game::types::{Cell, Difficulty, Position};

/// State of one operator-matching session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquationSession {
    pub difficulty: Difficulty,
    pub current_equation: Option<Equation>,
    /// `None` until the current equation is answered, then the last verdict.
    pub last_check_result: Option<bool>,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Latched once the current equation is answered correctly.
    pub answered_current_correctly: bool,
}

impl EquationSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty, ..Self::default() }
    }
}

/// State of one maze session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSession {
    pub difficulty: Difficulty,
    pub grid: MazeGrid,
    pub player_position: Position,
    pub move_count: u32,
    pub is_completed: bool,
}

impl MazeSession {
    /// Fresh session on the built-in grid for `difficulty`, player on the spawn.
    pub fn new(difficulty: Difficulty) -> Self {
        let grid = MazeGrid::builtin(difficulty);
        let player_position = grid.spawn();
        MazeSession {
            difficulty,
            grid,
            player_position,
            move_count: 0,
            is_completed: false,
        }
    }

    pub fn current_cell(&self) -> Option<Cell> {
        self.grid.cell(self.player_position)
    }
}
