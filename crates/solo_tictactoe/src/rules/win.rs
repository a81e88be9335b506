//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Cell, Mark, Position};

/// Three positions that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple([Position; 3]);

impl Triple {
    /// The positions of this triple.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of this triple.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether a position belongs to this triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark if all three cells hold it.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.get(a) {
            Cell::Marked(mark) if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) => {
                Some(mark)
            }
            _ => None,
        }
    }
}

/// The 8 winning triples: rows, then columns, then diagonals.
pub const TRIPLES: [Triple; 8] = [
    // Rows
    Triple([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Triple([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Triple([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Triple([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Triple([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Triple([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Triple([Position::TopLeft, Position::Center, Position::BottomRight]),
    Triple([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed triple and its mark.
#[instrument(skip(board))]
pub fn winning_triple(board: &Board) -> Option<(Mark, Triple)> {
    TRIPLES
        .iter()
        .find_map(|triple| triple.owner(board).map(|mark| (mark, *triple)))
}

/// Returns the first triple completed by `mark`.
pub fn winning_triple_for(board: &Board, mark: Mark) -> Option<Triple> {
    TRIPLES
        .iter()
        .copied()
        .find(|triple| triple.owner(board) == Some(mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_triple(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Marked(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_each_triple_wins_in_isolation() {
        for mark in [Mark::X, Mark::O] {
            for triple in TRIPLES {
                let board = board_with(mark, &triple.positions());

                assert_eq!(winning_triple(&board), Some((mark, triple)));
                assert_eq!(winning_triple_for(&board, mark), Some(triple));
                assert_eq!(winning_triple_for(&board, mark.opponent()), None);
                for other in TRIPLES.iter().filter(|t| **t != triple) {
                    assert_eq!(other.owner(&board), None, "{other:?} matched {triple:?}");
                }
            }
        }
    }

    #[test]
    fn test_mixed_triple_does_not_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Marked(Mark::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::O, &[Position::TopRight, Position::Center]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_triple_indices() {
        assert_eq!(TRIPLES[0].indices(), [0, 1, 2]);
        assert_eq!(TRIPLES[4].indices(), [1, 4, 7]);
        assert_eq!(TRIPLES[7].indices(), [2, 4, 6]);
        assert!(TRIPLES[6].contains(Position::Center));
        assert!(!TRIPLES[6].contains(Position::TopRight));
    }
}
