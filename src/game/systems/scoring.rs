//! Answer checking and streak tracking.

use serde::{Serialize, Deserialize};

use crate::game::state::EquationSession;
use crate::game::types::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// No equation yet, or the current one was already answered correctly.
    Ignored,
}

/// Score `selected` against the current equation.
///
/// `None` stands for a symbol that names no operator and is scored as a
/// wrong answer.
pub fn check_answer(session: &mut EquationSession, selected: Option<Operator>) -> AnswerOutcome {
    let Some(equation) = session.current_equation else {
        return AnswerOutcome::Ignored;
    };
    if session.answered_current_correctly {
        return AnswerOutcome::Ignored;
    }

    if selected == Some(equation.correct_operator) {
        session.last_check_result = Some(true);
        session.current_streak += 1;
        session.best_streak = session.best_streak.max(session.current_streak);
        session.answered_current_correctly = true;
        AnswerOutcome::Correct
    } else {
        session.last_check_result = Some(false);
        session.current_streak = 0;
        AnswerOutcome::Incorrect
    }
}

pub fn reset_streaks(session: &mut EquationSession) {
    session.current_streak = 0;
    session.best_streak = 0;
}
