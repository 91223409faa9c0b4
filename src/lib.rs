//! Math & Path: an operator-matching game and a maze navigator.
//!
//! - [`game`]: the two game engines and everything they are built from.
//! - [`server`]: the WebSocket bridge that puts the engines in front of a client.
//! - [`config`]: gameplay, flood-protection and server settings.

pub mod config;
pub mod game;
pub mod server;
