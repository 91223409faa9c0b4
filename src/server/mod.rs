// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the presentation bridge in front of the game engines:
//! - HTTP/WebSocket routing and the game catalogue
//! - One WebSocket session actor per game kind
//! - Wire messages, error payloads and flood protection

pub mod router;
pub mod catalog;
pub mod messages;
pub mod equation_session;
pub mod maze_session;
pub mod ws_actor_utils;
pub mod ws_error;
pub mod anti_spam;
