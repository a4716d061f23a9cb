//! Shared value types: points, the reconstructed grid, and parsing/rounding knobs.
//!
//! - `Point`: a 2D coordinate compared by value.
//! - `Grid`: complete N×N row-major point sequence with row and column views.
//! - `GridCfg`: entry separator and angle precision.

use nalgebra::Vector2;

use crate::grid::columns_from_rows;

/// A grid point `(x, y)`.
pub type Point = Vector2<f64>;

/// Parsing and rounding configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    /// Field separator inside one entry (`x<sep>y`).
    pub separator: char,
    /// Decimal places kept in the reported angle.
    pub angle_decimals: i32,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            separator: ',',
            angle_decimals: 1,
        }
    }
}

/// Complete N×N grid stored row-major (row 0 first, column 0 first in each row).
///
/// Invariant: `points.len() == dimension * dimension`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dimension: usize,
    points: Vec<Point>,
}

impl Grid {
    /// Wrap a row-major sequence; `None` unless it holds exactly `dimension²` points.
    pub fn from_row_major(dimension: usize, points: Vec<Point>) -> Option<Self> {
        if dimension.checked_mul(dimension)? != points.len() {
            return None;
        }
        Some(Self { dimension, points })
    }

    /// Callers guarantee the length invariant.
    #[inline]
    pub(crate) fn from_parts(dimension: usize, points: Vec<Point>) -> Self {
        debug_assert_eq!(points.len(), dimension * dimension);
        Self { dimension, points }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn row_major(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Point> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        Some(self.points[row * self.dimension + col])
    }

    /// Rows as contiguous slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Point]> + '_ {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.points.chunks(self.dimension.max(1))
    }

    /// Column view derived from the row-major sequence.
    pub fn columns(&self) -> Vec<Vec<Point>> {
        columns_from_rows(self.dimension, &self.points)
    }

    pub fn into_row_major(self) -> Vec<Point> {
        self.points
    }
}
