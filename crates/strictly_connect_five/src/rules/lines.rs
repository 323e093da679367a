//! Winning-line generation from board geometry.
//!
//! A line is traced from a start coordinate along a direction vector whose
//! components are each -1, 0 or 1. Only one direction of each ± pair is
//! used (first non-zero component positive), and a start is kept only when
//! all `LINE_LEN` steps stay on the board along every axis.

use crate::variant::{LINE_LEN, SIDE};
use serde::{Deserialize, Serialize};

/// Linear cell indices of one potential winning alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([usize; LINE_LEN]);

impl Line {
    /// Returns the cell indices in traversal order.
    pub fn cells(&self) -> &[usize; LINE_LEN] {
        &self.0
    }

    /// Checks if the line passes through the given cell.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generates every line of `LINE_LEN` aligned cells on a board with
/// `dimensions` axes of `SIDE` cells.
///
/// Directions are visited in a fixed order (last axis varying fastest,
/// step values ordered 0, +1, -1) and starts in row-major order, so the
/// result is deterministic.
pub fn generate_lines(dimensions: usize) -> Vec<Line> {
    let starts = all_coords(dimensions);
    let mut lines = Vec::new();

    for direction in directions(dimensions) {
        lines.extend(starts.iter().filter_map(|start| trace(start, &direction)));
    }

    lines
}

/// Canonical direction vectors: non-zero, first non-zero component positive.
fn directions(dimensions: usize) -> Vec<Vec<isize>> {
    const STEPS: [isize; 3] = [0, 1, -1];

    let total = STEPS.len().pow(dimensions as u32);
    (0..total)
        .map(|n| {
            digits(n, STEPS.len(), dimensions)
                .into_iter()
                .map(|digit| STEPS[digit])
                .collect::<Vec<_>>()
        })
        .filter(|direction| direction.iter().find(|&&step| step != 0) == Some(&1))
        .collect()
}

/// Every coordinate on the board in row-major order.
fn all_coords(dimensions: usize) -> Vec<Vec<usize>> {
    (0..SIDE.pow(dimensions as u32))
        .map(|n| digits(n, SIDE, dimensions))
        .collect()
}

/// Base-`radix` digits of `n`, most significant first, padded to `width`.
fn digits(mut n: usize, radix: usize, width: usize) -> Vec<usize> {
    let mut out = vec![0; width];
    for slot in out.iter_mut().rev() {
        *slot = n % radix;
        n /= radix;
    }
    out
}

/// Walks `LINE_LEN` steps from `start`, or `None` if any step leaves the board.
fn trace(start: &[usize], direction: &[isize]) -> Option<Line> {
    let mut cells = [0; LINE_LEN];

    for (step, cell) in cells.iter_mut().enumerate() {
        let mut index = 0;
        for (&origin, &delta) in start.iter().zip(direction) {
            let value = origin as isize + delta * step as isize;
            if !(0..SIDE as isize).contains(&value) {
                return None;
            }
            index = index * SIDE + value as usize;
        }
        *cell = index;
    }

    Some(Line(cells))
}
