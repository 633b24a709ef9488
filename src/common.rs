//! Common types: marks, moves, game status and the crate's error enums.

use crate::bitboard::BitBoardError;

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cell coordinate, each component in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Errors returned by board construction and the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (coordinate outside the grid).
    BitBoardError(BitBoardError),
    /// Move targets a cell that is already marked.
    IllegalMove { row: usize, col: usize },
    /// Board text contained a character that is not a mark or empty cell.
    InvalidCell(char),
    /// Board text did not describe exactly nine cells.
    InvalidLength(usize),
    /// Mark counts that cannot arise when X moves first.
    MarkImbalance { x: usize, o: usize },
    /// Both marks claim the same cell.
    Overlap,
    /// A move was played after the game ended.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::IllegalMove { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::InvalidCell(ch) => write!(f, "Invalid cell character {:?}", ch),
            BoardError::InvalidLength(n) => write!(f, "Expected 9 cells, found {}", n),
            BoardError::MarkImbalance { x, o } => {
                write!(f, "Unreachable mark counts: X={}, O={}", x, o)
            }
            BoardError::Overlap => write!(f, "Both players marked the same cell"),
            BoardError::GameOver => write!(f, "Game is already over"),
        }
    }
}

/// Errors returned by the PageRank estimators.
#[derive(Debug, Clone, PartialEq)]
pub enum RankError {
    /// Damping factor outside the open interval (0, 1).
    InvalidDamping(f64),
    /// Sample count of zero.
    InvalidSamples,
    /// Convergence threshold that is not a positive finite number.
    InvalidThreshold(f64),
    /// Iteration did not settle within the configured number of rounds.
    DidNotConverge { iterations: usize },
}

impl core::fmt::Display for RankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RankError::InvalidDamping(d) => write!(f, "Damping factor {} is not in (0, 1)", d),
            RankError::InvalidSamples => write!(f, "Sample count must be positive"),
            RankError::InvalidThreshold(t) => {
                write!(f, "Convergence threshold {} must be positive", t)
            }
            RankError::DidNotConverge { iterations } => {
                write!(f, "PageRank did not converge after {} rounds", iterations)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for RankError {}
#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
