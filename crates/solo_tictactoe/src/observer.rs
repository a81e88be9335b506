//! Notifications for a presentation layer.
//!
//! The engine never draws anything. After each state change it hands every
//! registered [`Observer`] the event plus a [`Snapshot`] holding plain data
//! to render: board, status, winning triple and scores.

use serde::{Deserialize, Serialize};

use crate::{Board, Mark, MoveOutcome, Party, Position, ScoreBoard, Status, Triple};

/// A state change the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A session started for a named player.
    SessionStarted {
        /// Trimmed player name.
        player_name: String,
        /// The player's mark.
        symbol: Mark,
    },
    /// A move was applied to the board.
    MoveApplied {
        /// Who moved.
        party: Party,
        /// Where.
        position: Position,
        /// What happened; never `Rejected`.
        outcome: MoveOutcome,
    },
    /// The board was cleared for a new game.
    Reset,
}

/// Everything a presentation layer needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Player name, once a session started.
    pub player_name: Option<String>,
    /// The player's mark, once a session started.
    pub player_symbol: Option<Mark>,
    /// The computer's mark, once a session started.
    pub opponent_symbol: Option<Mark>,
    /// Party to move, while a session is in progress.
    pub active_turn: Option<Party>,
    /// Session status; `InProgress` before any session.
    pub status: Status,
    /// Completed triple, only after a win.
    pub winning_triple: Option<Triple>,
    /// Cumulative tally.
    pub scores: ScoreBoard,
}

/// Receives engine notifications.
pub trait Observer: Send {
    /// Called after every applied state change.
    fn notify(&mut self, event: &EngineEvent, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&EngineEvent, &Snapshot) + Send,
{
    fn notify(&mut self, event: &EngineEvent, snapshot: &Snapshot) {
        self(event, snapshot)
    }
}
