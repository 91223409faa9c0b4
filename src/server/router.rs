//! HTTP and WebSocket routing configuration.
//!
//! Defines the catalogue endpoints and one WebSocket endpoint per game.
//! Each game socket is handled by a dedicated session actor.

use actix_web::web;
use crate::server::catalog::{list_difficulties, list_games};
use crate::server::equation_session::ws_math_matching;
use crate::server::maze_session::ws_maze_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
    )
    .service(
        web::resource("/games/{game}/difficulties")
            .route(web::get().to(list_difficulties))
    )
    .service(
        web::resource("/ws/math_matching/{difficulty}")
            .to(ws_math_matching)
    )
    .service(
        web::resource("/ws/maze_game/{difficulty}")
            .to(ws_maze_game)
    );
}
