use log::{debug, info};
use tokio::sync::watch;

use crate::game::sound::{Silent, SoundEvent, SoundSink};
use crate::game::state::MazeSession;
use crate::game::systems::{move_player, render_maze, MoveOutcome};
use crate::game::types::{Difficulty, Direction};

/// Maze navigation engine.
pub struct MazeEngine<S = Silent> {
    session: MazeSession,
    sound: S,
    updates: watch::Sender<MazeSession>,
}

impl<S: SoundSink> MazeEngine<S> {
    /// Engine already holding a fresh game on `difficulty`.
    pub fn new(difficulty: Difficulty, sound: S) -> Self {
        let session = MazeSession::new(difficulty);
        let (updates, _) = watch::channel(session.clone());
        Self { session, sound, updates }
    }

    /// Load the built-in grid for `difficulty` and put the player on its spawn.
    pub fn start_new_game(&mut self, difficulty: Difficulty) {
        self.session = MazeSession::new(difficulty);
        info!(
            "[MazeEngine] New {} game, spawn at ({}, {})",
            difficulty.tag(),
            self.session.player_position.row,
            self.session.player_position.col
        );
        self.publish();
    }

    /// Same as [`Self::start_new_game`]; unknown tags mean easy.
    pub fn start_new_game_tag(&mut self, tag: &str) {
        self.start_new_game(Difficulty::from_tag(tag));
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = move_player(&mut self.session, direction);
        match outcome {
            MoveOutcome::Moved => self.sound.play(SoundEvent::Move),
            MoveOutcome::Completed => {
                info!("[MazeEngine] Goal reached in {} moves", self.session.move_count);
                self.sound.play(SoundEvent::Completion);
            }
            MoveOutcome::Blocked => {
                debug!("[MazeEngine] Move {:?} blocked", direction);
                self.sound.play(SoundEvent::InvalidMove);
                return outcome;
            }
            MoveOutcome::Ignored => return outcome,
        }
        debug!("[MazeEngine] Move {:?}\n{}", direction, render_maze(&self.session));
        self.publish();
        outcome
    }

    /// Restart on the same difficulty.
    pub fn reset_game(&mut self) {
        self.start_new_game(self.session.difficulty);
    }

    pub fn session(&self) -> &MazeSession {
        &self.session
    }

    pub fn snapshot(&self) -> MazeSession {
        self.session.clone()
    }

    /// Receiver that always holds the latest session state.
    pub fn subscribe(&self) -> watch::Receiver<MazeSession> {
        self.updates.subscribe()
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    fn publish(&self) {
        self.updates.send_replace(self.session.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    const EASY_ROUTE: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Down,
    ];

    #[test]
    fn test_worked_example() {
        let mut engine = MazeEngine::new(Difficulty::Easy, Vec::new());
        assert_eq!(engine.session().player_position, Position::new(0, 0));

        assert_eq!(engine.move_player(Direction::Right), MoveOutcome::Moved);
        assert_eq!(engine.session().player_position, Position::new(0, 1));
        assert_eq!(engine.session().move_count, 1);

        assert_eq!(engine.move_player(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(engine.session().player_position, Position::new(0, 1));
        assert_eq!(engine.session().move_count, 1);

        assert_eq!(engine.sound(), &vec![SoundEvent::Move, SoundEvent::InvalidMove]);
    }

    #[test]
    fn test_easy_route_completes() {
        let mut engine = MazeEngine::new(Difficulty::Easy, Vec::new());
        let outcomes: Vec<MoveOutcome> = EASY_ROUTE.iter().map(|&d| engine.move_player(d)).collect();

        // Input after the goal is absorbed.
        assert_eq!(outcomes[6], MoveOutcome::Completed);
        assert_eq!(outcomes[7], MoveOutcome::Ignored);
        assert!(engine.session().is_completed);
        assert_eq!(engine.session().player_position, Position::new(3, 4));
        assert_eq!(engine.session().move_count, 7);
        assert_eq!(engine.sound().last(), Some(&SoundEvent::Completion));
        assert_eq!(engine.sound().len(), 7);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut engine = MazeEngine::new(Difficulty::Medium, Vec::new());
        engine.move_player(Direction::Right);
        engine.move_player(Direction::Down);
        engine.reset_game();

        let session = engine.session();
        assert_eq!(session.difficulty, Difficulty::Medium);
        assert_eq!(session.player_position, session.grid.spawn());
        assert_eq!(session.move_count, 0);
        assert!(!session.is_completed);
    }

    #[test]
    fn test_start_new_game_tag_falls_back_to_easy() {
        let mut engine = MazeEngine::new(Difficulty::Hard, Silent);
        engine.start_new_game_tag("EXPERT");
        assert_eq!(engine.session().difficulty, Difficulty::Easy);
        assert_eq!(engine.session().grid.width(), 5);

        engine.start_new_game_tag("Hard");
        assert_eq!(engine.session().grid.width(), 9);
    }

    #[test]
    fn test_blocked_move_publishes_nothing() {
        let mut engine = MazeEngine::new(Difficulty::Easy, Silent);
        let rx = engine.subscribe();
        engine.move_player(Direction::Up);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_subscribers_track_moves() {
        let mut engine = MazeEngine::new(Difficulty::Easy, Silent);
        let mut rx = engine.subscribe();
        engine.move_player(Direction::Right);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().player_position, Position::new(0, 1));

        engine.reset_game();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), engine.snapshot());
    }
}
