//! Strictly Connect Five - five-in-a-row game core
//!
//! Pure game logic for a five-in-a-row game played on either a flat 5×5
//! board or a stacked 5×5×5 board, with a rewindable move history.
//!
//! # Architecture
//!
//! - **Variant**: type-level board geometry (`Flat`, `Stacked`) and coordinate indexing
//! - **Snapshot**: immutable board state, one per move
//! - **Rules**: winning-line generation, win and draw detection
//! - **History**: linear log of snapshots with a cursor for time travel
//! - **Game**: session that validates moves and drives the history
//!
//! # Example
//!
//! ```
//! use strictly_connect_five::{Flat, Game, GameStatus, Mark, Variant};
//!
//! # fn example() -> Result<(), strictly_connect_five::MoveError> {
//! let mut game = Game::<Flat>::new();
//! game.place_at([2, 2])?;
//! assert_eq!(game.current_player(), Mark::O);
//!
//! game.jump_to(0)?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! let centre = game.current_snapshot().cell_at(Flat::index([2, 2])?)?;
//! assert_eq!(centre, strictly_connect_five::Cell::Empty);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod error;
mod game;
mod history;
mod invariants;
mod rules;
mod snapshot;
mod types;
mod variant;

// Crate-level exports - Domain types
pub use action::Move;
pub use types::{Cell, GameStatus, Mark};

// Crate-level exports - Board geometry
pub use snapshot::Snapshot;
pub use variant::{Flat, LINE_LEN, SIDE, Stacked, Variant, VariantKind};

// Crate-level exports - Rules
pub use rules::{Line, is_draw, is_full, status, winner_of, winning_line};

// Crate-level exports - History and session
pub use game::Game;
pub use history::History;

// Crate-level exports - Errors
pub use error::{BoardError, HistoryError, MoveError};

// Crate-level exports - Invariants and contracts
pub use contracts::{CellIsEmpty, Contract, MoveContract, NoWinnerYet, PlayersTurn};
pub use invariants::{
    AlternatingTurnInvariant, CursorInRangeInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, SingleCellDiffInvariant,
};
