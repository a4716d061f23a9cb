//! Grid orientation from the max-x and min-y corner points.

use crate::types::Point;

/// Angle in degrees of the edge from `y_min` to `x_max`, rounded to `decimals`.
///
/// Computed as `atan(Δy / Δx)`. A vertical edge (`Δx == 0`) yields an infinite
/// ratio and saturates to ±90°; coincident points give NaN. Rounding is half to
/// even.
pub fn orientation_angle(x_max: Point, y_min: Point, decimals: i32) -> f64 {
    let opposite = x_max.y - y_min.y;
    let adjacent = x_max.x - y_min.x;
    let degrees = (opposite / adjacent).atan().to_degrees();
    round_to(degrees, decimals)
}

#[inline]
fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_45() {
        let a = orientation_angle(Point::new(1.0, 1.0), Point::new(0.0, 0.0), 1);
        assert_eq!(a, 45.0);
    }

    #[test]
    fn vertical_edge_saturates() {
        let up = orientation_angle(Point::new(0.0, 1.0), Point::new(0.0, 0.0), 1);
        assert_eq!(up, 90.0);
        let down = orientation_angle(Point::new(0.0, -1.0), Point::new(0.0, 0.0), 1);
        assert_eq!(down, -90.0);
    }

    #[test]
    fn coincident_points_are_nan() {
        let p = Point::new(2.0, 3.0);
        assert!(orientation_angle(p, p, 1).is_nan());
    }

    #[test]
    fn rounds_to_requested_precision() {
        // atan(1/2) = 26.565051...°
        let a1 = orientation_angle(Point::new(2.0, 1.0), Point::new(0.0, 0.0), 1);
        assert_eq!(a1, 26.6);
        let a3 = orientation_angle(Point::new(2.0, 1.0), Point::new(0.0, 0.0), 3);
        assert!((a3 - 26.565).abs() < 1e-9);
        let a0 = orientation_angle(Point::new(2.0, 1.0), Point::new(0.0, 0.0), 0);
        assert_eq!(a0, 27.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }
}
