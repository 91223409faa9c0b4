//! Game engines.
//!
//! Each engine exclusively owns one session, mutates it synchronously on every
//! command and publishes the new state to its subscribers.

pub mod equation;
pub mod maze;

pub use equation::EquationEngine;
pub use maze::MazeEngine;
