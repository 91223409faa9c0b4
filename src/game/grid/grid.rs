use serde::{Serialize, Deserialize};

use crate::game::error::GridError;
use crate::game::grid::maps::table_for;
use crate::game::types::{Cell, Difficulty, Position};

/// Rectangular maze grid.
///
/// The width is validated once at construction and stored, so bounds checks
/// never depend on the length of an individual row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct MazeGrid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl MazeGrid {
    /// Build a grid from caller-supplied rows.
    ///
    /// The rows must be non-empty and rectangular, hold exactly one goal and
    /// at least one empty cell.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged { row, expected: width, actual: r.len() });
        }

        let goals = rows.iter().flatten().filter(|&&c| c == Cell::Goal).count();
        if goals != 1 {
            return Err(GridError::GoalCount { found: goals });
        }
        if !rows.iter().flatten().any(|&c| c == Cell::Empty) {
            return Err(GridError::NoSpawn);
        }

        Ok(Self { rows, width })
    }

    /// The fixed map for `difficulty`.
    pub fn builtin(difficulty: Difficulty) -> Self {
        let table = table_for(difficulty);
        // Tables are checked here in debug builds and by the tests below.
        let rows: Vec<Vec<Cell>> = table.iter().map(|row| row.to_vec()).collect();
        let width = table.first().map(|row| row.len()).unwrap_or(0);
        debug_assert!(
            MazeGrid::from_rows(rows.clone()).is_ok(),
            "built-in {} map is malformed",
            difficulty.tag()
        );
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height() && pos.col < self.width
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.rows[pos.row][pos.col])
    }

    /// First empty cell in row-major order, `(0, 0)` if there is none.
    pub fn spawn(&self) -> Position {
        self.find(Cell::Empty).unwrap_or_default()
    }

    pub fn goal(&self) -> Option<Position> {
        self.find(Cell::Goal)
    }

    fn find(&self, target: Cell) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, cells)| {
            cells.iter().position(|&c| c == target).map(|col| Position { row, col })
        })
    }
}

impl TryFrom<Vec<Vec<Cell>>> for MazeGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        MazeGrid::from_rows(rows)
    }
}

impl From<MazeGrid> for Vec<Vec<Cell>> {
    fn from(grid: MazeGrid) -> Self {
        grid.rows
    }
}
