//! Single-cell diff invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::History;
use crate::variant::Variant;

/// Invariant: the first snapshot is empty, and every later snapshot differs
/// from its predecessor in exactly one cell, which went from empty to occupied.
pub struct SingleCellDiffInvariant;

impl<V: Variant> Invariant<History<V>> for SingleCellDiffInvariant {
    fn holds(history: &History<V>) -> bool {
        let snapshots = history.snapshots();

        let starts_empty = snapshots
            .first()
            .is_some_and(|first| first.occupied_count() == 0);

        starts_empty
            && snapshots.windows(2).all(|pair| {
                match pair[0].diff(&pair[1]).as_slice() {
                    [index] => pair[0].cells()[*index].is_empty(),
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}
