pub mod types;
pub mod error;
pub mod sound;
pub mod state;
pub mod entities;
pub mod grid;
pub mod systems;
pub mod engines;

#[cfg(test)]
mod tests;
