//! Player movement system.
//!
//! This module moves the maze player one cell at a time, rejecting steps that
//! leave the grid or hit a wall.

use serde::{Serialize, Deserialize};

use crate::game::grid::MazeGrid;
use crate::game::state::MazeSession;
use crate::game::types::{Cell, Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveOutcome {
    /// The player stepped onto an empty cell.
    Moved,
    /// The player stepped onto the goal.
    Completed,
    /// Out of bounds or into a wall; nothing changed.
    Blocked,
    /// The session was already completed.
    Ignored,
}

/// The cell reached by one step from `from`, if it is inside the grid and not a wall.
pub fn target_position(grid: &MazeGrid, from: Position, direction: Direction) -> Option<Position> {
    let candidate = from.step(direction)?;
    match grid.cell(candidate) {
        Some(cell) if cell.is_walkable() => Some(candidate),
        _ => None,
    }
}

/// Move the player in the given direction.
/// A completed session absorbs every move.
pub fn move_player(session: &mut MazeSession, direction: Direction) -> MoveOutcome {
    if session.is_completed {
        return MoveOutcome::Ignored;
    }

    let Some(new_pos) = target_position(&session.grid, session.player_position, direction) else {
        return MoveOutcome::Blocked;
    };

    session.player_position = new_pos;
    session.move_count += 1;

    if session.grid.cell(new_pos) == Some(Cell::Goal) {
        session.is_completed = true;
        MoveOutcome::Completed
    } else {
        MoveOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Difficulty;

    #[test]
    fn test_step_into_empty_cell() {
        let mut session = MazeSession::new(Difficulty::Easy);
        assert_eq!(move_player(&mut session, Direction::Right), MoveOutcome::Moved);
        assert_eq!(session.player_position, Position::new(0, 1));
        assert_eq!(session.move_count, 1);
    }

    #[test]
    fn test_wall_blocks_without_counting() {
        let mut session = MazeSession::new(Difficulty::Easy);
        move_player(&mut session, Direction::Right);
        assert_eq!(move_player(&mut session, Direction::Right), MoveOutcome::Blocked);
        assert_eq!(session.player_position, Position::new(0, 1));
        assert_eq!(session.move_count, 1);
    }

    #[test]
    fn test_edges_block() {
        let mut session = MazeSession::new(Difficulty::Medium);
        assert_eq!(move_player(&mut session, Direction::Up), MoveOutcome::Blocked);
        assert_eq!(move_player(&mut session, Direction::Left), MoveOutcome::Blocked);
        assert_eq!(session.player_position, Position::new(0, 0));
        assert_eq!(session.move_count, 0);
    }

    #[test]
    fn test_goal_completes_and_freezes() {
        let mut session = MazeSession::new(Difficulty::Easy);
        session.player_position = Position::new(3, 3);
        assert_eq!(move_player(&mut session, Direction::Right), MoveOutcome::Completed);
        assert!(session.is_completed);
        assert_eq!(session.player_position, Position::new(3, 4));

        for direction in Direction::ALL {
            assert_eq!(move_player(&mut session, direction), MoveOutcome::Ignored);
        }
        assert_eq!(session.player_position, Position::new(3, 4));
        assert_eq!(session.move_count, 1);
    }

    #[test]
    fn test_target_position_rejects_bottom_and_right_edges() {
        let grid = MazeGrid::builtin(Difficulty::Easy);
        assert_eq!(target_position(&grid, Position::new(3, 4), Direction::Down), None);
        assert_eq!(target_position(&grid, Position::new(3, 4), Direction::Right), None);
        assert_eq!(
            target_position(&grid, Position::new(3, 4), Direction::Left),
            Some(Position::new(3, 3))
        );
    }
}
