//! Draw detection and overall status for five-in-a-row.

use super::win::winner_of;
use crate::snapshot::Snapshot;
use crate::types::GameStatus;
use crate::variant::Variant;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(snapshot))]
pub fn is_full<V: Variant>(snapshot: &Snapshot<V>) -> bool {
    snapshot.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(snapshot))]
pub fn is_draw<V: Variant>(snapshot: &Snapshot<V>) -> bool {
    is_full(snapshot) && winner_of(snapshot).is_none()
}

/// Folds win and draw detection into a single status.
#[instrument(skip(snapshot))]
pub fn status<V: Variant>(snapshot: &Snapshot<V>) -> GameStatus {
    match winner_of(snapshot) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(snapshot) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
