//! Error types for board, history and move operations.

use crate::types::Mark;

/// Error raised by board indexing and snapshot construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A coordinate lies outside the board on some axis.
    #[display("Coordinate {value} on axis {axis} is outside the board")]
    InvalidCoordinate {
        /// Axis position in the coordinate tuple (0 is the most significant).
        axis: usize,
        /// Offending value.
        value: usize,
    },

    /// A coordinate tuple has the wrong number of axes for the variant.
    #[display("Expected {expected} coordinates, found {found}")]
    WrongArity {
        /// Number of axes the variant uses.
        expected: usize,
        /// Number of axes supplied.
        found: usize,
    },

    /// A linear index lies outside the board.
    #[display("Cell index {index} is outside a board of {size} cells")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of cells on the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// Occupied index.
        index: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error raised by the history engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Jump target is not a recorded snapshot.
    #[display("History index {index} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board rejected the move.
    #[display("{_0}")]
    Board(BoardError),

    /// The history rejected a jump.
    #[display("{_0}")]
    History(HistoryError),

    /// The current board already has a winner.
    #[display("Game is already over ({winner} won)")]
    GameOver {
        /// Mark that completed a line.
        winner: Mark,
    },

    /// It's not this mark's turn.
    #[display("It's not {mark}'s turn")]
    WrongPlayer {
        /// Mark that tried to move.
        mark: Mark,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(err) => Some(err),
            MoveError::History(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl From<HistoryError> for MoveError {
    fn from(err: HistoryError) -> Self {
        MoveError::History(err)
    }
}
