//! Audio notifications emitted by the engines.
//!
//! Notifications are fire-and-forget: an engine hands the event to its sink
//! and never looks at the outcome.

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEvent {
    Correct,
    Incorrect,
    Move,
    InvalidMove,
    Completion,
}

/// Receiver of engine notifications.
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Recording sink, mostly useful in tests.
impl SoundSink for Vec<SoundEvent> {
    fn play(&mut self, event: SoundEvent) {
        self.push(event);
    }
}

impl<S: SoundSink + ?Sized> SoundSink for &mut S {
    fn play(&mut self, event: SoundEvent) {
        (**self).play(event);
    }
}
