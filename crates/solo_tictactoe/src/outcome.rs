//! Results of applying a move.
//!
//! A rejected move is not an error. It is a no-op signal: the board,
//! session and scores are exactly as they were before the call.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Party, Position};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// No session has been started.
    #[display("No session has been started")]
    NoSession,

    /// The session already concluded.
    #[display("Game is already over")]
    GameOver,

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The mark's owner is not the party to move.
    #[display("It's not {:?}'s turn", _0)]
    OutOfTurn(Party),

    /// Index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was ignored; nothing changed.
    Rejected(Rejection),
    /// The move was applied and the turn passed to the other party.
    Continued,
    /// The move completed a triple.
    Won(Party),
    /// The move filled the board with no triple.
    Draw,
}

impl MoveOutcome {
    /// True when the move concluded the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Draw)
    }
}

/// The cell the opponent picked and what happened when it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct OpponentMove {
    position: Position,
    outcome: MoveOutcome,
}

impl OpponentMove {
    /// The chosen cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Result of playing the chosen cell.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }
}
