//! Machine-readable summary of a game.

use serde::Serialize;
use strictly_connect_five::{Cell, Game, GameStatus, Mark, Move, Variant, VariantKind};

/// Snapshot of a game's state for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    /// Board variant.
    pub variant: VariantKind,
    /// Current history position.
    pub position: usize,
    /// Number of recorded snapshots.
    pub history_len: usize,
    /// Mark to move at the current position.
    pub next_player: Mark,
    /// Status of the current snapshot.
    pub status: GameStatus,
    /// Cells of the completed line, if any.
    pub winning_line: Option<Vec<usize>>,
    /// Every recorded move, including any after the current position.
    pub moves: Vec<Move>,
    /// Cells of the current snapshot in linear-index order.
    pub cells: Vec<Cell>,
}

impl GameReport {
    /// Builds a report for the game's current position.
    pub fn from_game<V: Variant>(game: &Game<V>) -> Self {
        Self {
            variant: V::KIND,
            position: game.history().position(),
            history_len: game.history().len(),
            next_player: game.current_player(),
            status: game.status(),
            winning_line: game.winning_line().map(|(_, line)| line.cells().to_vec()),
            moves: game.history().moves(),
            cells: game.current_snapshot().cells().to_vec(),
        }
    }
}
