//! Forwards engine notifications to the UI loop.

use solo_tictactoe::{EngineEvent, Observer, Snapshot};
use tokio::sync::mpsc;
use tracing::warn;

/// Engine observer that queues events for the app to drain each tick.
#[derive(Debug)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Observer for ChannelObserver {
    fn notify(&mut self, event: &EngineEvent, _snapshot: &Snapshot) {
        if self.tx.send(event.clone()).is_err() {
            warn!(?event, "UI event queue closed");
        }
    }
}
