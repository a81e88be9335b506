//! Move sources for the computer opponent.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::Position;

/// Chooses the computer's next cell.
pub trait Opponent: std::fmt::Debug + Send {
    /// Picks one of `open` (never empty when called by the engine).
    ///
    /// Returning `None` leaves the board untouched.
    fn choose(&mut self, open: &[Position]) -> Option<Position>;
}

/// Picks uniformly at random among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Uses the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<StdRng> {
    /// Deterministic opponent for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Opponent seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng + std::fmt::Debug + Send> Opponent for RandomOpponent<R> {
    #[instrument(skip(self))]
    fn choose(&mut self, open: &[Position]) -> Option<Position> {
        let choice = open.choose(&mut self.rng).copied();
        debug!(?choice, "Random opponent chose");
        choice
    }
}

/// Replays a fixed list of cell indices.
///
/// Indices that are out of range or already occupied are skipped, so a
/// script can be written without tracking the other party's moves.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOpponent {
    script: VecDeque<usize>,
}

impl ScriptedOpponent {
    /// Creates an opponent that plays `indices` in order.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: indices.into_iter().collect(),
        }
    }

    /// Indices not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Opponent for ScriptedOpponent {
    #[instrument(skip(self))]
    fn choose(&mut self, open: &[Position]) -> Option<Position> {
        while let Some(index) = self.script.pop_front() {
            match Position::from_index(index) {
                Some(pos) if open.contains(&pos) => return Some(pos),
                _ => debug!(index, "Skipping scripted cell that is not open"),
            }
        }
        None
    }
}
