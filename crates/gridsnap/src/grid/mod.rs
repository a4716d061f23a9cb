//! Grid reconstruction: corner interpolation or axis-aligned fallback.
//!
//! Purpose
//! - Recover the rows of an N×N point grid from an unordered `CoordinateSet`,
//!   including rotated and sheared grids, and report its orientation angle.
//!
//! Paths
//! - Interpolated (all axis values unique): trace rows as straight lines between
//!   opposing corner pairs of the bounding quadrilateral and snap every
//!   interpolated coordinate onto an observed value. See `interp`.
//! - Axis-aligned (some axis value repeats): rank points by descending y (rows)
//!   and ascending x (columns). The angle is fixed at 0. See `fallback`.
//!
//! Columns are never recomputed; they come from `columns_from_rows`.

mod fallback;
mod interp;

use crate::angle::orientation_angle;
use crate::coords::CoordinateSet;
use crate::error::GridError;
use crate::types::{Grid, GridCfg};

/// Which reconstruction path produced a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPath {
    Interpolated,
    AxisAligned,
}

impl GridPath {
    pub fn as_str(self) -> &'static str {
        match self {
            GridPath::Interpolated => "interpolated",
            GridPath::AxisAligned => "axis_aligned",
        }
    }
}

/// Reconstructed grid plus orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Reconstruction {
    pub grid: Grid,
    pub path: GridPath,
    /// Orientation in degrees; 0 for the axis-aligned path and single points.
    pub alpha_degrees: f64,
}

/// Parse `entries` and reconstruct the grid in one step.
pub fn reconstruct<I, S>(entries: I, cfg: &GridCfg) -> Result<Reconstruction, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = CoordinateSet::parse_with(entries, cfg)?;
    reconstruct_from(&set, cfg)
}

/// Reconstruct the grid of an already parsed batch.
pub fn reconstruct_from(set: &CoordinateSet, cfg: &GridCfg) -> Result<Reconstruction, GridError> {
    let n = dimension_of(set.len())?;
    if set.has_duplicates() {
        tracing::debug!(dimension = n, "duplicate axis values; axis-aligned grid");
        let grid = fallback::axis_aligned(set, n)?;
        return Ok(Reconstruction {
            grid,
            path: GridPath::AxisAligned,
            alpha_degrees: 0.0,
        });
    }
    tracing::debug!(dimension = n, "interpolating rows from corners");
    let grid = interp::interpolate(set, n);
    let alpha_degrees = if n < 2 {
        0.0
    } else {
        let c = set.corners();
        orientation_angle(c.x_max, c.y_min, cfg.angle_decimals)
    };
    Ok(Reconstruction {
        grid,
        path: GridPath::Interpolated,
        alpha_degrees,
    })
}

/// Side length of a square grid holding `count` points.
pub fn dimension_of(count: usize) -> Result<usize, GridError> {
    if count == 0 {
        return Err(GridError::EmptyInput);
    }
    let n = (count as f64).sqrt().round() as usize;
    if n.checked_mul(n) != Some(count) {
        return Err(GridError::InvalidDimension { count });
    }
    Ok(n)
}

/// Column-major view of a row-major N×N sequence: `out[c][r] == row_major[r * n + c]`.
///
/// Panics if `row_major.len() != n * n`.
pub fn columns_from_rows<T: Copy>(n: usize, row_major: &[T]) -> Vec<Vec<T>> {
    assert_eq!(
        row_major.len(),
        n * n,
        "row-major sequence must hold exactly n² entries"
    );
    (0..n)
        .map(|c| (0..n).map(|r| row_major[r * n + c]).collect())
        .collect()
}

#[cfg(test)]
mod tests;
