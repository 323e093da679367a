//! Cursor invariant: the current position always names a recorded snapshot.

use super::Invariant;
use crate::history::History;
use crate::variant::Variant;

/// Invariant: the history is non-empty and `position < len`.
pub struct CursorInRangeInvariant;

impl<V: Variant> Invariant<History<V>> for CursorInRangeInvariant {
    fn holds(history: &History<V>) -> bool {
        !history.snapshots().is_empty() && history.position() < history.len()
    }

    fn description() -> &'static str {
        "Current position lies within the recorded history"
    }
}
