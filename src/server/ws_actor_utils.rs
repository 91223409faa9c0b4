use actix::prelude::*;
use actix_web_actors::ws;
use log::error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::server::anti_spam::AntiSpamState;
use crate::server::messages::ServerWsMessage;
use crate::server::ws_error::{ws_error_message, ws_flood_message};

/// Shared behaviour of the game WebSocket actors (equation and maze sessions).
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn session_id(&self) -> Uuid;

    /// Send the flood notice, close and stop the actor.
    fn close_for_flood<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id().to_string();
        ctx.text(ws_flood_message(Some(&session)));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Too many requests".into()),
        }));
        ctx.stop();
    }

    /// Count an incoming request; close the connection and return false once the budget is spent.
    fn admit_request<A>(&mut self, ctx: &mut ws::WebsocketContext<A>) -> bool
    where
        A: Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id().to_string();
        if self.anti_spam().record_request(&session) {
            self.close_for_flood(ctx);
            return false;
        }
        true
    }

    /// Send an error unless the same code was just sent.
    fn send_error<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<&str>,
    )
    where
        A: Actor<Context = ws::WebsocketContext<A>>,
    {
        let session = self.session_id().to_string();
        if self.anti_spam().should_send_error(code, &session) {
            ctx.text(ws_error_message(code, message, context));
        }
    }

    /// Serialize and send a server message. A serialization failure closes the connection.
    fn send_message<A>(&mut self, ctx: &mut ws::WebsocketContext<A>, msg: &ServerWsMessage)
    where
        A: Actor<Context = ws::WebsocketContext<A>>,
    {
        match serde_json::to_string(msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[WsSession] Failed to serialize server message for {}: {}", self.session_id(), e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// Forward every snapshot published on `updates` to `recipient`.
///
/// The task ends when the engine owning the sender is dropped.
pub fn spawn_snapshot_forwarder<T, M>(
    mut updates: watch::Receiver<T>,
    recipient: Recipient<M>,
    wrap: fn(T) -> M,
)
where
    T: Clone + 'static,
    M: Message<Result = ()> + Send + 'static,
{
    actix::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            recipient.do_send(wrap(snapshot));
        }
    });
}
