//! Game session: validated moves on top of the move history.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::history::History;
use crate::rules::{self, Line};
use crate::snapshot::Snapshot;
use crate::types::{GameStatus, Mark};
use crate::variant::Variant;
use tracing::{debug, info, instrument};

/// Five-in-a-row game engine.
///
/// Owns the only [`History`] of a game. Every mutation goes through
/// [`Game::apply`] (and the helpers built on it) or [`Game::jump_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<V: Variant> {
    history: History<V>,
}

impl<V: Variant> Game<V> {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!(variant = %V::KIND, "Starting new game");
        Self {
            history: History::new(),
        }
    }

    /// Places the current player's mark at a linear index.
    ///
    /// # Errors
    ///
    /// See [`Game::apply`].
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.current_player(), index);
        self.apply(action)
    }

    /// Places the current player's mark at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Board`] for an off-board coordinate, otherwise see
    /// [`Game::apply`].
    #[instrument(skip(self))]
    pub fn place_at(&mut self, coord: V::Coord) -> Result<GameStatus, MoveError> {
        let index = V::index(coord)?;
        self.place(index)
    }

    /// Applies a move after the current position, discarding any future
    /// snapshots, and returns the resulting status.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner
    /// - [`MoveError::Board`] if the cell is occupied or off the board
    /// - [`MoveError::WrongPlayer`] if `action.mark` is not to move
    #[instrument(skip(self), fields(position = self.history.position()))]
    pub fn apply(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&*self, &action)?;

        let next = self
            .current_snapshot()
            .with_move(action.index, action.mark)?;
        self.history.play(next);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &*self)?;

        let status = self.status();
        let moves = self.history.position();
        match status {
            GameStatus::Won(winner) => info!(%winner, moves, "Game won"),
            GameStatus::Draw => info!(moves, "Game drawn"),
            GameStatus::InProgress => debug!(%action, "Move applied"),
        }
        Ok(status)
    }

    /// Selects a recorded snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::History`] if `index` is not recorded.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        self.history.jump_to(index)?;
        debug!(index, to_move = %self.current_player(), "Jumped in history");
        Ok(())
    }

    /// Rebuilds a game from a sequence of moves.
    ///
    /// # Errors
    ///
    /// Fails on the first move that [`Game::apply`] rejects.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.apply(*action)?;
        }
        Ok(game)
    }

    /// Returns the move history.
    pub fn history(&self) -> &History<V> {
        &self.history
    }

    /// Returns the snapshot at the current position.
    pub fn current_snapshot(&self) -> &Snapshot<V> {
        self.history.current_snapshot()
    }

    /// Returns the mark to move at the current position.
    pub fn current_player(&self) -> Mark {
        self.history.current_player()
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_snapshot())
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner_of(self.current_snapshot())
    }

    /// Completed line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<(Mark, &'static Line)> {
        rules::winning_line(self.current_snapshot())
    }
}

impl<V: Variant> Default for Game<V> {
    fn default() -> Self {
        Self::new()
    }
}
