//! Equation entity logic.
//!
//! This module builds random equations with a missing operator. Operands are
//! drawn from the difficulty's range and arranged so the equation always holds
//! under integer arithmetic.

use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::RangeInclusive;

use crate::config::game::{EASY_PRODUCT_RANGE, EASY_RANGE, HARD_RANGE, MEDIUM_RANGE};
use crate::game::types::{Difficulty, Operator};

/// `num1 <correct_operator> num2 == result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub num1: i32,
    pub num2: i32,
    pub result: i32,
    pub correct_operator: Operator,
}

impl Equation {
    /// True if the stored operator really produces the stored result.
    pub fn holds(&self) -> bool {
        self.correct_operator.apply(self.num1, self.num2) == Some(self.result)
    }
}

/// Numeric range operands are drawn from.
pub fn operand_range(difficulty: Difficulty) -> RangeInclusive<i32> {
    match difficulty {
        Difficulty::Easy => EASY_RANGE,
        Difficulty::Medium => MEDIUM_RANGE,
        Difficulty::Hard => HARD_RANGE,
    }
}

/// Range for multiplication operands and division factors.
/// Easy is capped so products stay small.
fn product_range(difficulty: Difficulty) -> RangeInclusive<i32> {
    match difficulty {
        Difficulty::Easy => EASY_PRODUCT_RANGE,
        other => operand_range(other),
    }
}

/// Generate an equation for `difficulty` with a uniformly random operator.
pub fn generate_equation<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Equation {
    let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
    generate_with_operator(difficulty, operator, rng)
}

/// Generate an equation for `difficulty` whose missing operator is `operator`.
pub fn generate_with_operator<R: Rng>(
    difficulty: Difficulty,
    operator: Operator,
    rng: &mut R,
) -> Equation {
    let range = operand_range(difficulty);

    let (num1, num2, result) = match operator {
        Operator::Add => {
            let n1 = rng.random_range(range.clone());
            let n2 = rng.random_range(range);
            (n1, n2, n1 + n2)
        }
        Operator::Sub => {
            let n1 = rng.random_range(range.clone());
            let n2 = rng.random_range(range);
            let (hi, lo) = (n1.max(n2), n1.min(n2));
            (hi, lo, hi - lo)
        }
        Operator::Mul => {
            let factors = product_range(difficulty);
            let n1 = rng.random_range(factors.clone());
            let n2 = rng.random_range(factors);
            (n1, n2, n1 * n2)
        }
        Operator::Div => {
            // Derive the dividend so the quotient is always exact.
            let factors = product_range(difficulty);
            let n2 = rng.random_range(factors.clone());
            let quotient = rng.random_range(factors);
            (n2 * quotient, n2, quotient)
        }
    };

    Equation { num1, num2, result, correct_operator: operator }
}
