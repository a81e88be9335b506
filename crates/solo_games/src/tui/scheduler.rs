//! Pacing for the computer's reply.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

/// Holds at most one pending trigger for the computer's move.
///
/// Triggers are never cancelled. A trigger that fires when the computer is
/// not to move (say, after a reset) is ignored by the engine.
#[derive(Debug, Clone)]
pub struct OpponentScheduler {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OpponentScheduler {
    /// Scheduler that fires `delay` after each request.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Requests a trigger `delay` after `now`, replacing any pending one.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, now: Instant) {
        let deadline = now + self.delay;
        debug!(delay_ms = self.delay.as_millis() as u64, "Opponent move scheduled");
        self.deadline = Some(deadline);
    }

    /// Returns true once, when the pending trigger has come due.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a trigger is waiting.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
