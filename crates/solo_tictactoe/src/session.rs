//! State of one game between the named player and the computer.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Mark, Party, Status, Triple};

/// One game: who is playing which mark, whose turn it is and how it ended.
///
/// The player always moves first, both when the session starts and after
/// every reset, whichever mark they chose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    player_name: String,
    player_symbol: Mark,
    opponent_symbol: Mark,
    active_turn: Party,
    status: Status,
    winning_triple: Option<Triple>,
}

impl Session {
    /// Creates a session. The name must already be trimmed and non-empty.
    #[instrument]
    pub(crate) fn new(player_name: String, player_symbol: Mark) -> Self {
        Self {
            player_name,
            player_symbol,
            opponent_symbol: player_symbol.opponent(),
            active_turn: Party::Player,
            status: Status::InProgress,
            winning_triple: None,
        }
    }

    /// The player's name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The player's mark.
    pub fn player_symbol(&self) -> Mark {
        self.player_symbol
    }

    /// The computer's mark, always the complement of the player's.
    pub fn opponent_symbol(&self) -> Mark {
        self.opponent_symbol
    }

    /// The party expected to move next.
    pub fn active_turn(&self) -> Party {
        self.active_turn
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The completed triple, once the session is won.
    pub fn winning_triple(&self) -> Option<Triple> {
        self.winning_triple
    }

    /// Which party plays a mark in this session.
    pub fn owner_of(&self, mark: Mark) -> Party {
        if mark == self.player_symbol {
            Party::Player
        } else {
            Party::Opponent
        }
    }

    /// The mark a party plays in this session.
    pub fn mark_of(&self, party: Party) -> Mark {
        match party {
            Party::Player => self.player_symbol,
            Party::Opponent => self.opponent_symbol,
        }
    }

    pub(crate) fn pass_turn(&mut self) {
        self.active_turn = self.active_turn.other();
    }

    pub(crate) fn conclude(&mut self, status: Status, winning_triple: Option<Triple>) {
        self.status = status;
        self.winning_triple = winning_triple;
    }

    /// Back to the opening position, keeping name and marks.
    pub(crate) fn restart(&mut self) {
        self.active_turn = Party::Player;
        self.status = Status::InProgress;
        self.winning_triple = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_assigns_complement() {
        let session = Session::new("Ava".to_string(), Mark::O);
        assert_eq!(session.player_symbol(), Mark::O);
        assert_eq!(session.opponent_symbol(), Mark::X);
        assert_eq!(session.active_turn(), Party::Player);
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.owner_of(Mark::X), Party::Opponent);
        assert_eq!(session.mark_of(Party::Player), Mark::O);
    }

    #[test]
    fn test_restart_hands_turn_back_to_player() {
        let mut session = Session::new("Ava".to_string(), Mark::X);
        session.pass_turn();
        session.conclude(Status::Won(Party::Opponent), Some(crate::rules::TRIPLES[3]));

        session.restart();
        assert_eq!(session.active_turn(), Party::Player);
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.winning_triple(), None);
        assert_eq!(session.player_name(), "Ava");
    }
}
