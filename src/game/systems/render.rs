use crate::game::state::MazeSession;
use crate::game::types::Cell;

/// Text picture of a maze session, one grid row per line.
/// The player is drawn over whatever cell it stands on.
pub fn render_maze(session: &MazeSession) -> String {
    let mut out = String::new();
    for (row, cells) in session.grid.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let symbol = if session.player_position.row == row && session.player_position.col == col {
                "PP"
            } else {
                match cell {
                    Cell::Wall => "██",
                    Cell::Empty => "  ",
                    Cell::Goal => "GG",
                }
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Difficulty, Position};

    #[test]
    fn test_render_easy_spawn() {
        let session = MazeSession::new(Difficulty::Easy);
        let expected = "PP  ██  ██\n██      ██\n████  ████\n██      GG\n";
        assert_eq!(render_maze(&session), expected);
    }

    #[test]
    fn test_player_drawn_over_goal() {
        let mut session = MazeSession::new(Difficulty::Easy);
        session.player_position = Position::new(3, 4);
        let last = render_maze(&session).lines().last().map(str::to_string);
        assert_eq!(last.as_deref(), Some("██      PP"));
    }
}
