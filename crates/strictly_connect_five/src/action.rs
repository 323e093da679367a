//! First-class action types for five-in-a-row.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed at a linear cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Linear index of the target cell.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}
