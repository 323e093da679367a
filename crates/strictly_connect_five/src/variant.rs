//! Board geometry for the flat and stacked variants.
//!
//! A variant is a type-level marker, like the phase markers of a typestate
//! machine: it has no runtime representation, but fixes the number of axes,
//! the coordinate type and the winning-line table for every snapshot,
//! history and game parameterized by it.

use crate::error::BoardError;
use crate::rules::{self, Line};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::OnceLock;
use tracing::instrument;

/// Cells along every axis.
pub const SIDE: usize = 5;

/// Cells in a winning line.
pub const LINE_LEN: usize = 5;

/// Board geometry shared by snapshots, histories and games.
pub trait Variant: Debug + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Coordinate tuple, most significant axis first.
    type Coord: AsRef<[usize]> + AsMut<[usize]> + Default + Copy + Debug + PartialEq + Eq;

    /// Number of axes.
    const DIMENSIONS: usize;

    /// Runtime name of this variant.
    const KIND: VariantKind;

    /// Every winning line, generated on first use.
    fn lines() -> &'static [Line];

    /// Number of cells on the board.
    fn size() -> usize {
        SIDE.pow(Self::DIMENSIONS as u32)
    }

    /// Maps a coordinate to its linear cell index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if any axis is outside `0..SIDE`.
    fn index(coord: Self::Coord) -> Result<usize, BoardError> {
        linear_index(coord.as_ref())
    }

    /// Maps a coordinate slice to its linear cell index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongArity`] if the slice length differs from
    /// [`Variant::DIMENSIONS`], or [`BoardError::InvalidCoordinate`].
    fn index_of(coords: &[usize]) -> Result<usize, BoardError> {
        if coords.len() != Self::DIMENSIONS {
            return Err(BoardError::WrongArity {
                expected: Self::DIMENSIONS,
                found: coords.len(),
            });
        }
        linear_index(coords)
    }

    /// Maps a linear cell index back to its coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if `index >= size()`.
    fn coord(index: usize) -> Result<Self::Coord, BoardError> {
        let size = Self::size();
        if index >= size {
            return Err(BoardError::IndexOutOfBounds { index, size });
        }

        let mut coord = Self::Coord::default();
        let mut rest = index;
        for axis in coord.as_mut().iter_mut().rev() {
            *axis = rest % SIDE;
            rest /= SIDE;
        }
        Ok(coord)
    }
}

/// Row-major linear index for a coordinate of any arity.
fn linear_index(coords: &[usize]) -> Result<usize, BoardError> {
    coords
        .iter()
        .enumerate()
        .try_fold(0, |acc, (axis, &value)| {
            if value >= SIDE {
                Err(BoardError::InvalidCoordinate { axis, value })
            } else {
                Ok(acc * SIDE + value)
            }
        })
}

/// Single 5×5 plane, addressed by `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flat;

impl Variant for Flat {
    type Coord = [usize; 2];
    const DIMENSIONS: usize = 2;
    const KIND: VariantKind = VariantKind::Flat;

    fn lines() -> &'static [Line] {
        static LINES: OnceLock<Vec<Line>> = OnceLock::new();
        LINES.get_or_init(|| generate_for(Self::DIMENSIONS))
    }
}

/// Five stacked 5×5 planes, addressed by `[layer, row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stacked;

impl Variant for Stacked {
    type Coord = [usize; 3];
    const DIMENSIONS: usize = 3;
    const KIND: VariantKind = VariantKind::Stacked;

    fn lines() -> &'static [Line] {
        static LINES: OnceLock<Vec<Line>> = OnceLock::new();
        LINES.get_or_init(|| generate_for(Self::DIMENSIONS))
    }
}

#[instrument]
fn generate_for(dimensions: usize) -> Vec<Line> {
    let lines = rules::generate_lines(dimensions);
    tracing::debug!(dimensions, count = lines.len(), "Generated winning lines");
    lines
}

/// Runtime selector for a variant (CLI flags, config files).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VariantKind {
    /// 5×5 board.
    #[default]
    Flat,
    /// 5×5×5 board.
    Stacked,
}
