//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so they can be checked against arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{TRIPLES, Triple, check_winner, winning_triple, winning_triple_for};
