//! Errors surfaced while parsing entries or reconstructing a grid.
//!
//! Every variant is fatal for the batch: no partial grid is ever returned.

use std::fmt;

/// Errors surfaced by parsing and grid reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The batch holds no entries at all.
    EmptyInput,
    /// The first entry does not parse; no corner baseline can be seeded.
    MalformedFirstEntry { raw: String },
    /// A later entry does not parse. `line` is the 0-based entry position.
    MalformedEntry { line: usize, raw: String },
    /// The point count has no integer square root.
    InvalidDimension { count: usize },
    /// Duplicate-routed input whose distinct axis values do not form an N×N lattice.
    FallbackShape {
        distinct_x: usize,
        distinct_y: usize,
        dimension: usize,
    },
    /// Two points map to the same cell of the axis-aligned grid.
    CellCollision { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyInput => write!(f, "input contains no coordinates"),
            GridError::MalformedFirstEntry { raw } => write!(
                f,
                "the first line does not contain valid coordinates: {raw:?}"
            ),
            GridError::MalformedEntry { line, raw } => {
                write!(f, "invalid coordinate format in line {line}: {raw:?}")
            }
            GridError::InvalidDimension { count } => {
                write!(f, "{count} points cannot form a square grid")
            }
            GridError::FallbackShape {
                distinct_x,
                distinct_y,
                dimension,
            } => write!(
                f,
                "axis-aligned grid needs {dimension} distinct values per axis, \
                 found {distinct_x} x and {distinct_y} y values"
            ),
            GridError::CellCollision { row, col } => {
                write!(f, "more than one point maps to cell (row {row}, col {col})")
            }
        }
    }
}

impl std::error::Error for GridError {}
