//! Properties that must hold across whole sequences of engine commands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::engines::{EquationEngine, MazeEngine};
use crate::game::sound::{Silent, SoundEvent};
use crate::game::systems::{AnswerOutcome, MoveOutcome};
use crate::game::types::{Cell, Difficulty, Direction, Operator};

fn random_operator(rng: &mut StdRng) -> Operator {
    Operator::ALL[rng.random_range(0..Operator::ALL.len())]
}

fn random_direction(rng: &mut StdRng) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

#[test]
fn test_generated_equations_always_hold() {
    let mut engine = EquationEngine::with_rng(Silent, StdRng::seed_from_u64(42));
    for difficulty in Difficulty::ALL {
        engine.set_difficulty(difficulty);
        for _ in 0..2000 {
            engine.generate_equation();
            let eq = engine.session().current_equation.expect("equation after generate");
            assert!(eq.holds(), "{:?} on {:?}", eq, difficulty);
            assert!(eq.result >= 0);
            if eq.correct_operator == Operator::Div {
                assert_eq!(eq.num1 % eq.num2, 0);
            }
        }
    }
}

#[test]
fn test_streak_invariants_under_random_play() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut engine = EquationEngine::with_rng(Vec::new(), StdRng::seed_from_u64(100));
    engine.set_difficulty(Difficulty::Medium);

    let mut previous_best = 0;
    for _ in 0..5000 {
        let before = engine.snapshot();
        match rng.random_range(0..10) {
            0 => engine.generate_equation(),
            _ => {
                let outcome = engine.check_answer(random_operator(&mut rng));
                if before.answered_current_correctly {
                    assert_eq!(outcome, AnswerOutcome::Ignored);
                    assert_eq!(engine.session().current_streak, before.current_streak);
                }
            }
        }
        let session = engine.session();
        assert!(session.best_streak >= previous_best);
        assert!(session.best_streak >= session.current_streak);
        previous_best = session.best_streak;
    }

    let corrects = engine.sound().iter().filter(|&&e| e == SoundEvent::Correct).count();
    assert!(corrects > 0);
}

#[test]
fn test_correct_answer_scores_once() {
    let mut engine = EquationEngine::with_rng(Silent, StdRng::seed_from_u64(5));
    engine.set_difficulty(Difficulty::Hard);
    let answer = engine.session().current_equation.map(|eq| eq.correct_operator);
    let answer = answer.expect("equation after set_difficulty");

    assert_eq!(engine.check_answer(answer), AnswerOutcome::Correct);
    for _ in 0..10 {
        engine.check_answer(answer);
    }
    assert_eq!(engine.session().current_streak, 1);
    assert_eq!(engine.session().best_streak, 1);
}

#[test]
fn test_set_difficulty_always_resets_streaks() {
    let mut engine = EquationEngine::with_rng(Silent, StdRng::seed_from_u64(8));
    for difficulty in Difficulty::ALL.iter().cycle().take(9) {
        for _ in 0..3 {
            let answer = engine.session().current_equation.map(|eq| eq.correct_operator);
            if let Some(answer) = answer {
                engine.check_answer(answer);
            }
            engine.generate_equation();
        }
        engine.set_difficulty(*difficulty);
        assert_eq!(engine.session().current_streak, 0);
        assert_eq!(engine.session().best_streak, 0);
    }
}

#[test]
fn test_random_walks_never_leave_walkable_cells() {
    let mut rng = StdRng::seed_from_u64(2024);
    for difficulty in Difficulty::ALL {
        let mut engine = MazeEngine::new(difficulty, Silent);
        for _ in 0..3000 {
            let before = engine.snapshot();
            let outcome = engine.move_player(random_direction(&mut rng));
            let session = engine.session();

            let cell = session.current_cell().expect("player inside the grid");
            assert_ne!(cell, Cell::Wall);

            if before.is_completed {
                assert_eq!(outcome, MoveOutcome::Ignored);
                assert_eq!(session.player_position, before.player_position);
                assert_eq!(session.move_count, before.move_count);
            }
            if session.is_completed {
                assert_eq!(cell, Cell::Goal);
                engine.reset_game();
                let fresh = engine.session();
                assert_eq!(fresh.move_count, 0);
                assert!(!fresh.is_completed);
                assert_eq!(fresh.player_position, fresh.grid.spawn());
            }
        }
    }
}

#[test]
fn test_maze_notifications_match_outcomes() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut engine = MazeEngine::new(Difficulty::Hard, Vec::new());
    let mut expected = Vec::new();
    for _ in 0..500 {
        match engine.move_player(random_direction(&mut rng)) {
            MoveOutcome::Moved => expected.push(SoundEvent::Move),
            MoveOutcome::Completed => expected.push(SoundEvent::Completion),
            MoveOutcome::Blocked => expected.push(SoundEvent::InvalidMove),
            MoveOutcome::Ignored => {}
        }
    }
    assert_eq!(engine.sound(), &expected);
}
