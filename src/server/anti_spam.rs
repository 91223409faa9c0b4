use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::MAX_REQUESTS_PER_SECOND;

/// Tracks flood-protection state for a single WebSocket session.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    // Number of requests received in the current second
    requests_this_tick: u32,
    flooded: bool,
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            requests_this_tick: 0,
            flooded: false,
        }
    }

    /// Call at the start of every incoming request (message).
    /// Returns true once the session has exceeded the request budget.
    pub fn record_request(&mut self, session: &str) -> bool {
        self.tick();
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND && !self.flooded {
            self.flooded = true;
            warn!("[AntiSpam] Session {} exceeded {} requests per second", session, MAX_REQUESTS_PER_SECOND);
        }
        self.flooded
    }

    /// Call when sending an error. Returns true if the error should be sent (not suppressed).
    pub fn should_send_error(&mut self, error_code: &str, session: &str) -> bool {
        if self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for session={}", error_code, session);
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a valid action is performed (state-changing, not error).
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    pub fn is_flooded(&self) -> bool {
        self.flooded
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.requests_this_tick = 0;
        }
    }
}
