/// WebSocket session for the operator-matching game.
///
/// The actor owns one [`EquationEngine`] for the lifetime of the connection, applies
/// client commands to it and relays snapshots and sound notifications to the client.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::game::engines::EquationEngine;
use crate::game::types::Difficulty;
use crate::server::anti_spam::AntiSpamState;
use crate::server::messages::{
    EquationClientMessage, EquationSnapshot, EquationView, PlaySound, ServerWsMessage,
};
use crate::server::ws_actor_utils::{spawn_snapshot_forwarder, WsActorUtils};

pub struct EquationSessionActor {
    pub session_id: Uuid,
    pub difficulty: Difficulty,
    engine: Option<EquationEngine<Recipient<PlaySound>>>,
    anti_spam: AntiSpamState,
}

impl EquationSessionActor {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            difficulty,
            engine: None,
            anti_spam: AntiSpamState::new(),
        }
    }

    fn apply(&mut self, command: EquationClientMessage) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        match command {
            EquationClientMessage::SetDifficulty { difficulty } => {
                self.difficulty = difficulty;
                engine.set_difficulty(difficulty);
            }
            EquationClientMessage::NextEquation => engine.generate_equation(),
            EquationClientMessage::CheckAnswer { operator } => {
                let outcome = engine.check_answer_symbol(&operator);
                debug!("[EquationSession] {} answered '{}': {:?}", self.session_id, operator, outcome);
            }
            EquationClientMessage::Ping => {}
        }
    }
}

impl WsActorUtils for EquationSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl Actor for EquationSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Creates the engine and deals the first equation.
    fn started(&mut self, ctx: &mut Self::Context) {
        let mut engine = EquationEngine::new(ctx.address().recipient::<PlaySound>());
        spawn_snapshot_forwarder(engine.subscribe(), ctx.address().recipient(), EquationSnapshot);
        engine.set_difficulty(self.difficulty);
        self.engine = Some(engine);
        info!("[EquationSession] {} started on {}", self.session_id, self.difficulty.tag());
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(engine) = self.engine.take() {
            let session = engine.session();
            info!(
                "[EquationSession] {} closed, best streak {}",
                self.session_id, session.best_streak
            );
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for EquationSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if !self.admit_request(ctx) {
                    return;
                }
                match serde_json::from_str::<EquationClientMessage>(&text) {
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
                warn!("[EquationSession] {} protocol error: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<EquationSnapshot> for EquationSessionActor {
    type Result = ();

    fn handle(&mut self, msg: EquationSnapshot, ctx: &mut Self::Context) {
        let view = EquationView::from(&msg.0);
        self.send_message(ctx, &ServerWsMessage::EquationState(view));
    }
}

impl Handler<PlaySound> for EquationSessionActor {
    type Result = ();

    fn handle(&mut self, msg: PlaySound, ctx: &mut Self::Context) {
        self.send_message(ctx, &ServerWsMessage::Sound { event: msg.0 });
    }
}

/// WebSocket endpoint for the operator-matching game.
///
/// The `{difficulty}` path segment is parsed leniently; anything unknown plays on easy.
pub async fn ws_math_matching(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let difficulty = Difficulty::from_tag(&path.into_inner());
    ws::start(EquationSessionActor::new(difficulty), &req, stream)
}
