//! Cumulative win/draw tally.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Party, Status};

/// Wins and draws across every session played on one engine.
///
/// Counters only ever go up, and only when a move concludes a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    player_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// A tally with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by the player.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Games won by the computer.
    pub fn opponent_wins(&self) -> u32 {
        self.opponent_wins
    }

    /// Games that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total concluded games.
    pub fn games(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }

    /// Counts a concluded game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, status: Status) {
        match status {
            Status::Won(Party::Player) => self.player_wins += 1,
            Status::Won(Party::Opponent) => self.opponent_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => return,
        }
        debug!(
            player_wins = self.player_wins,
            opponent_wins = self.opponent_wins,
            draws = self.draws,
            "Score updated"
        );
    }
}
