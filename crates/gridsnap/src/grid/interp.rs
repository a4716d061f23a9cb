//! Row interpolation between corner pairs, snapped onto observed values.
//!
//! Row 0 runs from the min-x corner to the max-y corner. Each following row
//! moves both anchors along the side edges: the left anchor toward the min-y
//! corner, the right anchor toward the max-x corner.

use crate::coords::CoordinateSet;
use crate::types::{Grid, Point};

/// Row-major grid of `n²` snapped points. Requires an interpolation-ready set
/// (no duplicate axis values) of exactly `n²` points.
pub(super) fn interpolate(set: &CoordinateSet, n: usize) -> Grid {
    if n < 2 {
        return Grid::from_parts(n, set.points().to_vec());
    }
    let c = *set.corners();
    let last = (n - 1) as f64;
    let mut left = c.x_min;
    let mut right = c.y_max;
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let t = j as f64 / last;
            out.push(set.snap(lerp(left, right, t)));
        }
        if i + 1 < n {
            let t = (i + 1) as f64 / last;
            left = lerp(c.x_min, c.y_min, t);
            right = lerp(c.y_max, c.x_max, t);
        }
    }
    Grid::from_parts(n, out)
}

#[inline]
fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}
