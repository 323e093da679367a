//! Win detection logic for five-in-a-row.

use super::lines::Line;
use crate::snapshot::Snapshot;
use crate::types::{Cell, Mark};
use crate::variant::Variant;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the mark occupying every cell of the first completed line in
/// [`Variant::lines`] order, or `None` if no line is complete.
#[instrument(skip(snapshot))]
pub fn winner_of<V: Variant>(snapshot: &Snapshot<V>) -> Option<Mark> {
    winning_line(snapshot).map(|(mark, _)| mark)
}

/// Like [`winner_of`], but also returns the completed line.
#[instrument(skip(snapshot))]
pub fn winning_line<V: Variant>(snapshot: &Snapshot<V>) -> Option<(Mark, &'static Line)> {
    let cells = snapshot.cells();

    V::lines().iter().find_map(|line| {
        let [first, rest @ ..] = line.cells();
        match cells[*first] {
            Cell::Occupied(mark) if rest.iter().all(|&i| cells[i] == Cell::Occupied(mark)) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
