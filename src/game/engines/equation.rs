use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tokio::sync::watch;

use crate::game::entities::{generate_equation, Equation};
use crate::game::sound::{Silent, SoundEvent, SoundSink};
use crate::game::state::EquationSession;
use crate::game::systems::{check_answer, reset_streaks, AnswerOutcome};
use crate::game::types::{Difficulty, Operator};

/// Operator-matching game engine.
pub struct EquationEngine<S = Silent, R = StdRng> {
    session: EquationSession,
    sound: S,
    rng: R,
    updates: watch::Sender<EquationSession>,
}

impl<S: SoundSink> EquationEngine<S, StdRng> {
    /// Engine on easy with no equation yet, seeded from the OS.
    pub fn new(sound: S) -> Self {
        Self::with_rng(sound, StdRng::from_os_rng())
    }
}

impl<S: SoundSink, R: Rng> EquationEngine<S, R> {
    pub fn with_rng(sound: S, rng: R) -> Self {
        let session = EquationSession::default();
        let (updates, _) = watch::channel(session.clone());
        Self { session, sound, rng, updates }
    }

    /// Switch difficulty, clear both streaks and deal a fresh equation.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("[EquationEngine] Difficulty set to {}", difficulty.tag());
        self.session.difficulty = difficulty;
        reset_streaks(&mut self.session);
        self.generate_equation();
    }

    /// Same as [`Self::set_difficulty`]; unknown tags mean easy.
    pub fn set_difficulty_tag(&mut self, tag: &str) {
        self.set_difficulty(Difficulty::from_tag(tag));
    }

    pub fn generate_equation(&mut self) {
        let equation = generate_equation(self.session.difficulty, &mut self.rng);
        self.present(equation);
    }

    /// Replace the current equation with `equation` and clear the verdict.
    pub(crate) fn present(&mut self, equation: Equation) {
        debug_assert!(equation.holds(), "equation does not hold: {:?}", equation);
        debug!(
            "[EquationEngine] New equation: {} ? {} = {}",
            equation.num1, equation.num2, equation.result
        );
        self.session.current_equation = Some(equation);
        self.session.last_check_result = None;
        self.session.answered_current_correctly = false;
        self.publish();
    }

    pub fn check_answer(&mut self, selected: Operator) -> AnswerOutcome {
        self.score(Some(selected))
    }

    /// Check a raw operator symbol. Only the exact tokens `+`, `-`, `X` and `/`
    /// name an operator; anything else is a wrong answer.
    pub fn check_answer_symbol(&mut self, symbol: &str) -> AnswerOutcome {
        self.score(Operator::from_symbol(symbol))
    }

    fn score(&mut self, selected: Option<Operator>) -> AnswerOutcome {
        let outcome = check_answer(&mut self.session, selected);
        match outcome {
            AnswerOutcome::Correct => self.sound.play(SoundEvent::Correct),
            AnswerOutcome::Incorrect => self.sound.play(SoundEvent::Incorrect),
            AnswerOutcome::Ignored => {
                debug!("[EquationEngine] Answer ignored");
                return outcome;
            }
        }
        debug!(
            "[EquationEngine] {:?}: streak={} best={}",
            outcome, self.session.current_streak, self.session.best_streak
        );
        self.publish();
        outcome
    }

    pub fn session(&self) -> &EquationSession {
        &self.session
    }

    pub fn snapshot(&self) -> EquationSession {
        self.session.clone()
    }

    /// Receiver that always holds the latest session state.
    pub fn subscribe(&self) -> watch::Receiver<EquationSession> {
        self.updates.subscribe()
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    fn publish(&self) {
        self.updates.send_replace(self.session.clone());
    }
}
