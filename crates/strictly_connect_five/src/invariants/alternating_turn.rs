//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::history::History;
use crate::types::{Cell, Mark};
use crate::variant::Variant;

/// Invariant: Players alternate turns.
///
/// The move leading to snapshot `k + 1` places X when `k` is even and O
/// when `k` is odd. Steps that do not add a mark are left to
/// [`super::SingleCellDiffInvariant`].
pub struct AlternatingTurnInvariant;

impl<V: Variant> Invariant<History<V>> for AlternatingTurnInvariant {
    fn holds(history: &History<V>) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let expected = Cell::Occupied(Mark::to_move_after(k));
                pair[0]
                    .diff(&pair[1])
                    .iter()
                    .all(|&index| pair[1].cells()[index] == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
