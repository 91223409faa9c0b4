/// WebSocket session for the maze game.
///
/// The actor owns one [`MazeEngine`] for the lifetime of the connection.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, warn};
use uuid::Uuid;

use crate::game::engines::MazeEngine;
use crate::game::types::Difficulty;
use crate::server::anti_spam::AntiSpamState;
use crate::server::messages::{MazeClientMessage, MazeSnapshot, PlaySound, ServerWsMessage};
use crate::server::ws_actor_utils::{spawn_snapshot_forwarder, WsActorUtils};

pub struct MazeSessionActor {
    pub session_id: Uuid,
    pub difficulty: Difficulty,
    engine: Option<MazeEngine<Recipient<PlaySound>>>,
    anti_spam: AntiSpamState,
}

impl MazeSessionActor {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            difficulty,
            engine: None,
            anti_spam: AntiSpamState::new(),
        }
    }

    fn apply(&mut self, command: MazeClientMessage) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        match command {
            MazeClientMessage::Move { direction } => {
                engine.move_player(direction);
            }
            MazeClientMessage::Reset => engine.reset_game(),
            MazeClientMessage::Ping => {}
        }
    }
}

impl WsActorUtils for MazeSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl Actor for MazeSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Creates the engine and sends the initial board.
    fn started(&mut self, ctx: &mut Self::Context) {
        let engine = MazeEngine::new(self.difficulty, ctx.address().recipient::<PlaySound>());
        spawn_snapshot_forwarder(engine.subscribe(), ctx.address().recipient(), MazeSnapshot);
        let initial = ServerWsMessage::MazeState(engine.snapshot());
        self.engine = Some(engine);
        self.send_message(ctx, &initial);
        info!("[MazeSession] {} started on {}", self.session_id, self.difficulty.tag());
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(engine) = self.engine.take() {
            let session = engine.session();
            info!(
                "[MazeSession] {} closed after {} moves (completed: {})",
                self.session_id, session.move_count, session.is_completed
            );
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for MazeSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if !self.admit_request(ctx) {
                    return;
                }
                match serde_json::from_str::<MazeClientMessage>(&text) {
                    Ok(command) => {
                        self.anti_spam.reset_on_valid_action();
                        self.apply(command);
                    }
                    Err(e) => {
                        let context = e.to_string();
                        self.send_error(ctx, "INVALID_MESSAGE", "Invalid client message", Some(&context));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[MazeSession] {} protocol error: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<MazeSnapshot> for MazeSessionActor {
    type Result = ();

    fn handle(&mut self, msg: MazeSnapshot, ctx: &mut Self::Context) {
        self.send_message(ctx, &ServerWsMessage::MazeState(msg.0));
    }
}

impl Handler<PlaySound> for MazeSessionActor {
    type Result = ();

    fn handle(&mut self, msg: PlaySound, ctx: &mut Self::Context) {
        self.send_message(ctx, &ServerWsMessage::Sound { event: msg.0 });
    }
}

/// WebSocket endpoint for the maze game.
///
/// The `{difficulty}` path segment is parsed leniently; anything unknown plays on easy.
pub async fn ws_maze_game(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let difficulty = Difficulty::from_tag(&path.into_inner());
    ws::start(MazeSessionActor::new(difficulty), &req, stream)
}
