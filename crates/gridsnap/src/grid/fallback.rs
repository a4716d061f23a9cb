//! Axis-aligned grid for batches with repeated axis values.
//!
//! Rows are the distinct y values from top (largest) to bottom; columns the
//! distinct x values from left to right. Points are placed as read, without snapping.

use crate::coords::CoordinateSet;
use crate::error::GridError;
use crate::types::{Grid, Point};

pub(super) fn axis_aligned(set: &CoordinateSet, n: usize) -> Result<Grid, GridError> {
    let xs = distinct_sorted(set.points().iter().map(|p| p.x));
    let mut ys = distinct_sorted(set.points().iter().map(|p| p.y));
    ys.reverse();
    if xs.len() != n || ys.len() != n {
        return Err(GridError::FallbackShape {
            distinct_x: xs.len(),
            distinct_y: ys.len(),
            dimension: n,
        });
    }
    let mut cells: Vec<Option<Point>> = vec![None; n * n];
    for &p in set.points() {
        let row = ys.partition_point(|&y| y > p.y);
        let col = xs.partition_point(|&x| x < p.x);
        let cell = &mut cells[row * n + col];
        if let Some(prev) = cell {
            tracing::warn!(
                row,
                col,
                kept_x = prev.x,
                kept_y = prev.y,
                x = p.x,
                y = p.y,
                "two points share one grid cell"
            );
            return Err(GridError::CellCollision { row, col });
        }
        *cell = Some(p);
    }
    // n² points in n² cells without collision fill every cell.
    let points: Vec<Point> = cells.into_iter().flatten().collect();
    Ok(Grid::from_parts(n, points))
}

/// Ascending distinct values (`-0.0` and `0.0` merge).
fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v.dedup();
    v
}
