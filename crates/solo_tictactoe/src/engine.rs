//! The game engine: single owner of board, session and scores.

use tracing::{debug, info, instrument, warn};

use crate::observer::{EngineEvent, Observer, Snapshot};
use crate::opponent::{Opponent, RandomOpponent};
use crate::outcome::{MoveOutcome, OpponentMove, Rejection};
use crate::rules;
use crate::{Board, Cell, Mark, Party, Position, ScoreBoard, Session, SetupError, Status};

/// Tic-tac-toe engine for one player against the computer.
///
/// Create one per program run. Sessions come and go through
/// [`start_session`](Self::start_session) and
/// [`reset_session`](Self::reset_session); the [`ScoreBoard`] lives as
/// long as the engine.
///
/// Every board, status and score mutation goes through
/// [`apply_move`](Self::apply_move), for the player and the computer alike.
pub struct Engine {
    board: Board,
    session: Option<Session>,
    scores: ScoreBoard,
    opponent: Box<dyn Opponent>,
    observers: Vec<Box<dyn Observer>>,
}

impl Engine {
    /// Engine with a random opponent seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opponent(RandomOpponent::from_entropy())
    }

    /// Engine with the given move source for the computer.
    pub fn with_opponent(opponent: impl Opponent + 'static) -> Self {
        Self {
            board: Board::new(),
            session: None,
            scores: ScoreBoard::new(),
            opponent: Box::new(opponent),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every later state change.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current session, if one was started.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Cumulative tally.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// Plain-data copy of everything a presentation layer renders.
    pub fn snapshot(&self) -> Snapshot {
        capture(&self.board, self.session.as_ref(), self.scores)
    }

    /// Starts a session for a named player.
    ///
    /// The name is trimmed. The player takes `symbol`, the computer its
    /// complement, and the player moves first on a fresh board. Scores
    /// carry over from earlier sessions.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidName`] if the trimmed name is empty.
    /// Nothing changes in that case.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, name: &str, symbol: Mark) -> Result<&Session, SetupError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected session start with empty name");
            return Err(SetupError::InvalidName);
        }

        self.board = Board::new();
        let session = &*self.session.insert(Session::new(name.to_string(), symbol));
        info!(player_name = %name, %symbol, "Session started");

        let event = EngineEvent::SessionStarted {
            player_name: name.to_string(),
            symbol,
        };
        let snapshot = capture(&self.board, Some(session), self.scores);
        notify_all(&mut self.observers, &event, &snapshot);
        Ok(session)
    }

    /// Places `mark` at `position`, then settles win, draw or turn change.
    ///
    /// The mark's owner is derived from the session's symbols. Returns
    /// [`MoveOutcome::Rejected`] without changing anything when no session
    /// is running, the game is over, the cell is taken, or it is not the
    /// owner's turn.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> MoveOutcome {
        let (party, outcome) = match self.place(position, mark) {
            Ok(applied) => applied,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                return MoveOutcome::Rejected(rejection);
            }
        };

        debug!(?party, ?outcome, "Move applied");
        self.publish(EngineEvent::MoveApplied {
            party,
            position,
            outcome,
        });
        outcome
    }

    /// Index-based [`apply_move`](Self::apply_move) for cells 0-8.
    pub fn apply_move_at(&mut self, index: usize, mark: Mark) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position, mark),
            None => {
                debug!(index, "Move rejected: index out of bounds");
                MoveOutcome::Rejected(Rejection::OutOfBounds(index))
            }
        }
    }

    /// Places the player's own mark.
    pub fn player_move(&mut self, position: Position) -> MoveOutcome {
        match self.session.as_ref() {
            Some(session) => {
                let mark = session.mark_of(Party::Player);
                self.apply_move(position, mark)
            }
            None => MoveOutcome::Rejected(Rejection::NoSession),
        }
    }

    /// Lets the computer pick an empty cell and play it.
    ///
    /// Only meaningful while the session is in progress with the computer to
    /// move. Any other time (for example a delayed trigger arriving after a
    /// reset) this is a no-op returning `None`.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) -> Option<OpponentMove> {
        let session = self.session.as_ref()?;
        if session.status().is_over() || session.active_turn() != Party::Opponent {
            debug!(
                status = ?session.status(),
                turn = ?session.active_turn(),
                "Ignoring opponent move outside its turn"
            );
            return None;
        }
        let mark = session.mark_of(Party::Opponent);

        let open = self.board.empty_positions();
        let Some(position) = self.opponent.choose(&open) else {
            warn!(open = open.len(), "Opponent produced no move");
            return None;
        };

        let outcome = self.apply_move(position, mark);
        Some(OpponentMove::new(position, outcome))
    }

    /// Clears the board and hands the first move back to the player.
    ///
    /// Name, marks and scores are kept.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        self.board = Board::new();
        if let Some(session) = self.session.as_mut() {
            session.restart();
        }
        info!("Session reset");
        self.publish(EngineEvent::Reset);
    }

    /// Validates and writes one move, returning the mover and the outcome.
    fn place(&mut self, position: Position, mark: Mark) -> Result<(Party, MoveOutcome), Rejection> {
        let session = self.session.as_mut().ok_or(Rejection::NoSession)?;
        if session.status().is_over() {
            return Err(Rejection::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(Rejection::CellOccupied(position));
        }
        let party = session.owner_of(mark);
        if party != session.active_turn() {
            return Err(Rejection::OutOfTurn(party));
        }

        self.board.set(position, Cell::Marked(mark));

        let outcome = if let Some(triple) = rules::winning_triple_for(&self.board, mark) {
            let status = Status::Won(party);
            session.conclude(status, Some(triple));
            self.scores.record(status);
            info!(?party, triple = ?triple.indices(), "Game won");
            MoveOutcome::Won(party)
        } else if self.board.is_full() {
            session.conclude(Status::Draw, None);
            self.scores.record(Status::Draw);
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            session.pass_turn();
            MoveOutcome::Continued
        };

        Ok((party, outcome))
    }

    fn publish(&mut self, event: EngineEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        notify_all(&mut self.observers, &event, &snapshot);
    }
}

fn capture(board: &Board, session: Option<&Session>, scores: ScoreBoard) -> Snapshot {
    Snapshot {
        board: board.clone(),
        player_name: session.map(|s| s.player_name().to_string()),
        player_symbol: session.map(Session::player_symbol),
        opponent_symbol: session.map(Session::opponent_symbol),
        active_turn: session
            .filter(|s| !s.status().is_over())
            .map(Session::active_turn),
        status: session.map(Session::status).unwrap_or_default(),
        winning_triple: session.and_then(Session::winning_triple),
        scores,
    }
}

fn notify_all(observers: &mut [Box<dyn Observer>], event: &EngineEvent, snapshot: &Snapshot) {
    for observer in observers {
        observer.notify(event, snapshot);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("board", &self.board)
            .field("session", &self.session)
            .field("scores", &self.scores)
            .field("opponent", &self.opponent)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedOpponent;

    fn started(script: impl IntoIterator<Item = usize>) -> Engine {
        let mut engine = Engine::with_opponent(ScriptedOpponent::new(script));
        engine.start_session("Ava", Mark::X).unwrap();
        engine
    }

    #[test]
    fn test_move_before_session_is_rejected() {
        let mut engine = Engine::with_opponent(ScriptedOpponent::default());
        assert_eq!(
            engine.apply_move(Position::Center, Mark::X),
            MoveOutcome::Rejected(Rejection::NoSession)
        );
        assert_eq!(engine.opponent_move(), None);
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_continued_move_passes_turn() {
        let mut engine = started([]);
        assert_eq!(engine.player_move(Position::Center), MoveOutcome::Continued);
        assert_eq!(engine.session().unwrap().active_turn(), Party::Opponent);
        assert_eq!(engine.board().get(Position::Center), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut engine = started([]);
        assert_eq!(
            engine.apply_move_at(9, Mark::X),
            MoveOutcome::Rejected(Rejection::OutOfBounds(9))
        );
    }

    #[test]
    fn test_opponent_move_out_of_turn_consumes_nothing() {
        let mut engine = Engine::with_opponent(ScriptedOpponent::new([4]));
        engine.start_session("Ava", Mark::O).unwrap();

        assert_eq!(engine.opponent_move(), None);
        engine.player_move(Position::TopLeft);
        let reply = engine.opponent_move().unwrap();
        assert_eq!(reply.position(), Position::Center);
        assert_eq!(engine.board().get(Position::Center), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_exhausted_script_leaves_board_alone() {
        let mut engine = started([]);
        engine.player_move(Position::Center);
        let before = engine.snapshot();
        assert_eq!(engine.opponent_move(), None);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X / O X O / O X _  then X at 8 completes the diagonal and fills the board
        let mut engine = started([1, 3, 5, 6]);
        for cell in [0, 2, 4, 7] {
            assert_eq!(engine.apply_move_at(cell, Mark::X), MoveOutcome::Continued);
            let reply = engine.opponent_move().unwrap();
            assert_eq!(reply.outcome(), MoveOutcome::Continued);
        }
        assert_eq!(engine.apply_move_at(8, Mark::X), MoveOutcome::Won(Party::Player));
        assert!(engine.board().is_full());
        assert_eq!(engine.scores().player_wins(), 1);
        assert_eq!(engine.scores().draws(), 0);
    }
}
