use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::sound::{SoundEvent, SoundSink};
use crate::game::state::{EquationSession, MazeSession};
use crate::game::types::{Difficulty, Direction, Operator};

// Client -> server, operator-matching session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum EquationClientMessage {
    SetDifficulty { difficulty: Difficulty },
    NextEquation,
    CheckAnswer { operator: String },
    Ping,
}

// Client -> server, maze session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum MazeClientMessage {
    Move { direction: Direction },
    Reset,
    Ping,
}

/// Equation as shown to the player: the operator stays hidden until it has been found.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PuzzleView {
    pub num1: i32,
    pub num2: i32,
    pub result: i32,
    pub revealed_operator: Option<Operator>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EquationView {
    pub difficulty: Difficulty,
    pub equation: Option<PuzzleView>,
    pub last_check_result: Option<bool>,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl From<&EquationSession> for EquationView {
    fn from(session: &EquationSession) -> Self {
        let equation = session.current_equation.map(|eq| PuzzleView {
            num1: eq.num1,
            num2: eq.num2,
            result: eq.result,
            revealed_operator: session.answered_current_correctly.then_some(eq.correct_operator),
        });
        EquationView {
            difficulty: session.difficulty,
            equation,
            last_check_result: session.last_check_result,
            current_streak: session.current_streak,
            best_streak: session.best_streak,
        }
    }
}

// Server -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    EquationState(EquationView),
    MazeState(MazeSession),
    Sound { event: SoundEvent },
}

/// Sound notification routed back through the owning session actor.
#[derive(Message, Clone, Copy, Debug)]
#[rtype(result = "()")]
pub struct PlaySound(pub SoundEvent);

impl SoundSink for Recipient<PlaySound> {
    fn play(&mut self, event: SoundEvent) {
        self.do_send(PlaySound(event));
    }
}

#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct EquationSnapshot(pub EquationSession);

#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct MazeSnapshot(pub MazeSession);
