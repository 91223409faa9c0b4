pub mod movement;
pub mod scoring;
pub mod render;

pub use movement::*;
pub use scoring::*;
pub use render::*;
