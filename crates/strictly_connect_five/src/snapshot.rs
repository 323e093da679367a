//! Immutable board snapshots.

use crate::error::BoardError;
use crate::types::{Cell, Mark};
use crate::variant::Variant;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Complete, immutable record of every cell at one point in a game.
///
/// The length is fixed by the variant (25 or 125 cells) and never changes.
/// Moves never mutate a snapshot; [`Snapshot::with_move`] returns a new one,
/// so clones share storage and may be handed out freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot<V: Variant> {
    cells: Arc<[Cell]>,
    _variant: PhantomData<V>,
}

impl<V: Variant> Snapshot<V> {
    /// Creates a board with every cell empty.
    #[instrument]
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::Empty; V::size()].into(),
            _variant: PhantomData,
        }
    }

    /// Builds a snapshot by placing each `(index, mark)` on an empty board in order.
    ///
    /// # Errors
    ///
    /// Fails like [`Snapshot::with_move`] on the first bad placement.
    #[instrument(skip(moves))]
    pub fn from_moves(moves: impl IntoIterator<Item = (usize, Mark)>) -> Result<Self, BoardError> {
        moves
            .into_iter()
            .try_fold(Self::empty(), |board, (index, mark)| board.with_move(index, mark))
    }

    /// Returns the cell at a linear index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if the index is outside the board.
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfBounds {
                index,
                size: self.cells.len(),
            })
    }

    /// Returns the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if the coordinate is off the board.
    pub fn cell_at_coord(&self, coord: V::Coord) -> Result<Cell, BoardError> {
        self.cell_at(V::index(coord)?)
    }

    /// Returns a new snapshot equal to this one except `index` holds `mark`.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the cell already holds a mark,
    /// or [`BoardError::IndexOutOfBounds`] if the index is outside the board.
    #[instrument(skip(self))]
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Self, BoardError> {
        if let Cell::Occupied(existing) = self.cell_at(index)? {
            debug!(index, ?existing, "Refusing to overwrite occupied cell");
            return Err(BoardError::CellOccupied { index });
        }

        let mut cells = self.cells.to_vec();
        cells[index] = Cell::Occupied(mark);
        Ok(Self {
            cells: cells.into(),
            _variant: PhantomData,
        })
    }

    /// Returns all cells in linear-index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding the given mark.
    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Linear indices of every empty cell.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Linear indices where this snapshot and `other` disagree.
    pub fn diff(&self, other: &Self) -> Vec<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
            .collect()
    }
}

impl<V: Variant> Default for Snapshot<V> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Flat, Stacked};

    #[test]
    fn test_empty_snapshot_lengths() {
        assert_eq!(Snapshot::<Flat>::empty().cells().len(), 25);
        assert_eq!(Snapshot::<Stacked>::empty().cells().len(), 125);
        assert_eq!(Snapshot::<Stacked>::empty().occupied_count(), 0);
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let before = Snapshot::<Flat>::empty();
        let after = before.with_move(7, Mark::X).unwrap();

        assert_eq!(before.cell_at(7), Ok(Cell::Empty));
        assert_eq!(after.cell_at(7), Ok(Cell::Occupied(Mark::X)));
        assert_eq!(before.diff(&after), vec![7]);
        assert_eq!(before.occupied_count(), 0);
    }

    #[test]
    fn test_with_move_rejects_occupied_cell() {
        let board = Snapshot::<Flat>::empty().with_move(3, Mark::X).unwrap();
        assert_eq!(
            board.with_move(3, Mark::O),
            Err(BoardError::CellOccupied { index: 3 })
        );
        assert_eq!(board.cell_at(3), Ok(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_with_move_rejects_out_of_bounds() {
        let board = Snapshot::<Flat>::empty();
        assert_eq!(
            board.with_move(25, Mark::X),
            Err(BoardError::IndexOutOfBounds { index: 25, size: 25 })
        );
    }

    #[test]
    fn test_cell_at_coord() {
        let index = Stacked::index([1, 2, 3]).unwrap();
        let board = Snapshot::<Stacked>::empty().with_move(index, Mark::O).unwrap();
        assert_eq!(board.cell_at_coord([1, 2, 3]), Ok(Cell::Occupied(Mark::O)));
        assert_eq!(
            board.cell_at_coord([1, 2, 5]),
            Err(BoardError::InvalidCoordinate { axis: 2, value: 5 })
        );
    }

    #[test]
    fn test_counts_and_empty_cells() {
        let board =
            Snapshot::<Flat>::from_moves([(0, Mark::X), (1, Mark::O), (2, Mark::X)]).unwrap();
        assert_eq!(board.count_of(Mark::X), 2);
        assert_eq!(board.count_of(Mark::O), 1);
        assert_eq!(board.empty_cells().count(), 22);
        assert_eq!(board.empty_cells().next(), Some(3));
    }
}
