//! Linear move history with a cursor for time travel.
//!
//! The history is an undo log, not a tree: jumping back and then playing
//! discards every snapshot after the cursor, so the abandoned branch
//! cannot be redone.

use crate::action::Move;
use crate::error::HistoryError;
use crate::snapshot::Snapshot;
use crate::types::Mark;
use crate::variant::Variant;
use tracing::{debug, instrument};

/// Ordered snapshots of one game plus the currently selected position.
///
/// Index 0 is always the empty board; index `k` is the board after `k` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<V: Variant> {
    pub(crate) snapshots: Vec<Snapshot<V>>,
    pub(crate) position: usize,
}

impl<V: Variant> History<V> {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
            position: 0,
        }
    }

    /// Appends `next` after the current position and selects it.
    ///
    /// Any snapshots after the current position are discarded first.
    /// The caller is responsible for building `next` from
    /// [`History::current_snapshot`] with a single legal move.
    #[instrument(skip(self, next), fields(position = self.position, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Snapshot<V>) {
        let discarded = self.snapshots.len() - (self.position + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.position + 1);

        debug_assert_eq!(
            self.current_snapshot().diff(&next).len(),
            1,
            "Each snapshot must differ from its predecessor in exactly one cell"
        );

        self.snapshots.push(next);
        self.position = self.snapshots.len() - 1;
    }

    /// Selects a recorded snapshot without altering the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index >= len()`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    /// Returns the snapshot at the current position.
    pub fn current_snapshot(&self) -> &Snapshot<V> {
        &self.snapshots[self.position]
    }

    /// Returns the mark to move at the current position.
    pub fn current_player(&self) -> Mark {
        Mark::to_move_after(self.position)
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`, if recorded.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot<V>> {
        self.snapshots.get(index)
    }

    /// Returns every recorded snapshot.
    pub fn snapshots(&self) -> &[Snapshot<V>] {
        &self.snapshots
    }

    /// Recovers the move that produced each snapshot after the first.
    ///
    /// Entry `k` is the move from snapshot `k` to snapshot `k + 1`.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| match pair[0].diff(&pair[1]).as_slice() {
                [index] => pair[1].cells()[*index]
                    .mark()
                    .map(|mark| Move::new(mark, *index)),
                _ => None,
            })
            .collect()
    }

    /// Label for the history entry at `index`.
    pub fn entry_label(index: usize) -> String {
        if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        }
    }

    /// Labels for every recorded snapshot.
    pub fn entry_labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(Self::entry_label).collect()
    }
}

impl<V: Variant> Default for History<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use crate::variant::{Flat, Stacked};

    /// Plays `indices` in order, alternating marks from X.
    fn played(indices: &[usize]) -> History<Flat> {
        let mut history = History::new();
        for &index in indices {
            let mark = history.current_player();
            let next = history.current_snapshot().with_move(index, mark).unwrap();
            history.play(next);
        }
        history
    }

    #[test]
    fn test_initial_state() {
        let history = History::<Stacked>::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert_eq!(history.current_snapshot(), &Snapshot::empty());
        assert_eq!(history.current_player(), Mark::X);
    }

    #[test]
    fn test_play_advances_position() {
        let history = played(&[12, 0]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 2);
        assert_eq!(history.current_player(), Mark::X);
        assert_eq!(history.current_snapshot().cell_at(0), Ok(Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_jump_keeps_sequence() {
        let mut history = played(&[12, 0, 1]);
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.position(), 1);
        assert_eq!(history.current_player(), Mark::O);
        assert_eq!(history.current_snapshot().occupied_count(), 1);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = played(&[12]);
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_truncate_on_replay() {
        let mut history = played(&[0, 1, 2, 3]);
        assert_eq!(history.len(), 5);
        assert_eq!(history.position(), 4);

        history.jump_to(2).unwrap();
        let branch = history.current_snapshot().with_move(24, Mark::X).unwrap();
        history.play(branch.clone());

        assert_eq!(history.len(), 4);
        assert_eq!(history.position(), 3);
        assert_eq!(history.current_snapshot(), &branch);
        assert_eq!(history.current_snapshot().cell_at(2), Ok(Cell::Empty));
    }

    #[test]
    fn test_moves_recovered_from_snapshots() {
        let history = played(&[12, 0, 6]);
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Mark::X, 12),
                Move::new(Mark::O, 0),
                Move::new(Mark::X, 6),
            ]
        );
    }

    #[test]
    fn test_entry_labels() {
        let history = played(&[12, 0]);
        assert_eq!(
            history.entry_labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }
}
