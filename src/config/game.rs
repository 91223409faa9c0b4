/// Game configuration constants.
///
/// This module defines the numeric ranges used by the equation generator
/// for each difficulty level.
use std::ops::RangeInclusive;

/// Operand range for the easy difficulty.
pub const EASY_RANGE: RangeInclusive<i32> = 1..=10;

/// Operand range for the medium difficulty.
pub const MEDIUM_RANGE: RangeInclusive<i32> = 1..=50;

/// Operand range for the hard difficulty.
pub const HARD_RANGE: RangeInclusive<i32> = 1..=100;

/// Operand range for multiplication and division on easy,
/// where the full range would make the products too large.
pub const EASY_PRODUCT_RANGE: RangeInclusive<i32> = 1..=10;
