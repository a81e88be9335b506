//! Solo tic-tac-toe engine.
//!
//! Pure game logic for a single human player against a random computer
//! opponent. The engine owns the board, the current session, and the
//! score tally that survives across resets.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the 3x3 board and board positions
//! - **Rules**: win and draw detection over the 8 fixed triples
//! - **Session**: player name, symbols, turn and status of one game
//! - **Engine**: the single authority that mutates board, status and scores
//! - **Opponent**: injectable move sources (random or scripted)
//! - **Observer**: plain-data notifications for a presentation layer
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Engine, Mark, MoveOutcome, Position, ScriptedOpponent};
//!
//! let mut engine = Engine::with_opponent(ScriptedOpponent::new([4]));
//! engine.start_session("Ava", Mark::X).unwrap();
//!
//! assert_eq!(engine.player_move(Position::TopLeft), MoveOutcome::Continued);
//! let reply = engine.opponent_move().unwrap();
//! assert_eq!(reply.position(), Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod observer;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use engine::Engine;
pub use error::SetupError;
pub use observer::{EngineEvent, Observer, Snapshot};
pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
pub use outcome::{MoveOutcome, OpponentMove, Rejection};
pub use position::Position;
pub use rules::Triple;
pub use score::ScoreBoard;
pub use session::Session;
pub use types::{Board, Cell, Mark, Party, Status};
