use serde::{Serialize, Deserialize};

use crate::game::error::ParseTokenError;

/// Difficulty level shared by both games.
///
/// Tags are parsed leniently: matching is case-insensitive and anything
/// unrecognized falls back to [`Difficulty::Easy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl From<String> for Difficulty {
    fn from(tag: String) -> Self {
        Difficulty::from_tag(&tag)
    }
}

impl From<&str> for Difficulty {
    fn from(tag: &str) -> Self {
        Difficulty::from_tag(tag)
    }
}

/// Arithmetic operator missing from an equation.
/// On the wire each variant is its literal symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "X")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "X",
            Operator::Div => "/",
        }
    }

    /// Strict lookup: only the four literal symbols are recognized.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator with integer arithmetic.
    /// Returns `None` for overflow, division by zero, or a division with a remainder.
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => {
                if rhs != 0 && lhs.checked_rem(rhs) == Some(0) {
                    lhs.checked_div(rhs)
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn from_token(token: &str) -> Result<Self, ParseTokenError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseTokenError::Direction(token.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ParseTokenError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Direction::from_token(&token)
    }
}

/// One tile of a maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Wall,
    Goal,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

/// Grid coordinates, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`. `None` when the step would leave the
    /// non-negative quadrant; the upper bounds are the grid's concern.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { row, col } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| Position { row, col }),
            Direction::Down => row.checked_add(1).map(|row| Position { row, col }),
            Direction::Left => col.checked_sub(1).map(|col| Position { row, col }),
            Direction::Right => col.checked_add(1).map(|col| Position { row, col }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_tags_are_lenient() {
        assert_eq!(Difficulty::from_tag("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_tag(" Medium "), Difficulty::Medium);
        assert_eq!(Difficulty::from_tag("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::from_tag(""), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), r#""medium""#);
        let parsed: Difficulty = serde_json::from_str(r#""Hard""#).unwrap();
        assert_eq!(parsed, Difficulty::Hard);
        let fallback: Difficulty = serde_json::from_str(r#""???""#).unwrap();
        assert_eq!(fallback, Difficulty::Easy);
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("x"), None);
        assert_eq!(Operator::from_symbol("*"), None);
        assert_eq!(serde_json::to_string(&Operator::Mul).unwrap(), r#""X""#);
    }

    #[test]
    fn test_operator_apply_rejects_inexact_division() {
        assert_eq!(Operator::Div.apply(12, 4), Some(3));
        assert_eq!(Operator::Div.apply(13, 4), None);
        assert_eq!(Operator::Div.apply(13, 0), None);
        assert_eq!(Operator::Sub.apply(3, 7), Some(-4));
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token("LEFT").unwrap(), Direction::Left);
        assert!(Direction::from_token("north").is_err());
        let parsed: Direction = serde_json::from_str(r#""Up""#).unwrap();
        assert_eq!(parsed, Direction::Up);
        assert!(serde_json::from_str::<Direction>(r#""sideways""#).is_err());
    }

    #[test]
    fn test_position_step_stops_at_zero() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(origin.step(Direction::Down), Some(Position::new(1, 0)));
    }
}
