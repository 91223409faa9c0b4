//! Game and difficulty catalogue.
//!
//! These endpoints let a client build its game-selection and
//! difficulty-selection screens before opening a game socket.

use actix_web::{web, HttpResponse, Responder, http::StatusCode};
use serde::{Serialize, Deserialize};

use crate::game::types::Difficulty;
use crate::server::ws_error::http_error_response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    MathMatching,
    MazeGame,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::MathMatching, GameKind::MazeGame];

    pub fn id(self) -> &'static str {
        match self {
            GameKind::MathMatching => "math_matching",
            GameKind::MazeGame => "maze_game",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameKind::MathMatching => "Math Matching!",
            GameKind::MazeGame => "Maze Game!",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        GameKind::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntry {
    pub id: GameKind,
    pub title: String,
    pub difficulties: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultyEntry {
    pub difficulty: Difficulty,
    pub socket: String,
}

/// `GET /games`
pub async fn list_games() -> impl Responder {
    let games: Vec<GameEntry> = GameKind::ALL
        .into_iter()
        .map(|kind| GameEntry {
            id: kind,
            title: kind.title().to_string(),
            difficulties: format!("/games/{}/difficulties", kind.id()),
        })
        .collect();
    HttpResponse::Ok().json(games)
}

/// `GET /games/{game}/difficulties`
pub async fn list_difficulties(path: web::Path<String>) -> HttpResponse {
    let game = path.into_inner();
    let Some(kind) = GameKind::from_id(&game) else {
        return http_error_response("UNKNOWN_GAME", "No such game", Some(&game), StatusCode::NOT_FOUND);
    };
    let entries: Vec<DifficultyEntry> = Difficulty::ALL
        .into_iter()
        .map(|difficulty| DifficultyEntry {
            difficulty,
            socket: format!("/ws/{}/{}", kind.id(), difficulty.tag()),
        })
        .collect();
    HttpResponse::Ok().json(entries)
}
