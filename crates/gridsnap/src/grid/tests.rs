use super::*;
use crate::synth::{draw_grid, to_lines, ReplayToken, SampleCfg};
use crate::types::Point;
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn solve(lines: &[&str]) -> Result<Reconstruction, GridError> {
    reconstruct(lines.iter().copied(), &GridCfg::default())
}

/// Expected row-major order for an unshuffled sample: top row first, left to right.
fn expected_rows(cfg: &SampleCfg) -> Vec<Point> {
    let n = cfg.n;
    let mut out = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            out.push(cfg.lattice_point(n - 1 - r, c));
        }
    }
    out
}

#[test]
fn unit_square_goes_top_row_first() {
    let rec = solve(&["0,0", "0,1", "1,0", "1,1"]).unwrap();
    assert_eq!(rec.path, GridPath::AxisAligned);
    assert_eq!(
        rec.grid.row_major(),
        &[p(0.0, 1.0), p(1.0, 1.0), p(0.0, 0.0), p(1.0, 0.0)]
    );
    assert_eq!(rec.alpha_degrees, 0.0);
    assert_eq!(
        rec.grid.columns(),
        vec![
            vec![p(0.0, 1.0), p(0.0, 0.0)],
            vec![p(1.0, 1.0), p(1.0, 0.0)]
        ]
    );
}

#[test]
fn axis_aligned_shuffled_3x3() {
    let rec = solve(&[
        "2,0", "0,2", "1,1", "0,0", "2,2", "1,0", "0,1", "2,1", "1,2",
    ])
    .unwrap();
    assert_eq!(rec.path, GridPath::AxisAligned);
    let rows: Vec<Vec<Point>> = rec.grid.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows[0], vec![p(0.0, 2.0), p(1.0, 2.0), p(2.0, 2.0)]);
    assert_eq!(rows[1], vec![p(0.0, 1.0), p(1.0, 1.0), p(2.0, 1.0)]);
    assert_eq!(rows[2], vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
}

#[test]
fn any_repeated_value_routes_to_fallback() {
    // Only y repeats: 1,2 share y=5. The lattice shape check then rejects it,
    // which proves the interpolation path was not taken.
    let err = solve(&["0,5", "1,6", "2,5", "3,7"]).unwrap_err();
    assert!(matches!(err, GridError::FallbackShape { .. }), "{err:?}");
}

#[test]
fn fallback_shape_mismatch_is_error() {
    let err = solve(&["0,0", "0,1", "1,2", "2,3"]).unwrap_err();
    assert_eq!(
        err,
        GridError::FallbackShape {
            distinct_x: 3,
            distinct_y: 4,
            dimension: 2
        }
    );
}

#[test]
fn fallback_collision_is_error() {
    let err = solve(&["0,0", "1,1", "0,0", "1,0"]).unwrap_err();
    assert_eq!(err, GridError::CellCollision { row: 1, col: 0 });
}

#[test]
fn non_square_count_is_error() {
    let err = solve(&["0,0", "1,2", "2,1"]).unwrap_err();
    assert_eq!(err, GridError::InvalidDimension { count: 3 });
}

#[test]
fn parse_errors_propagate() {
    assert_eq!(
        solve(&["bad"]).unwrap_err(),
        GridError::MalformedFirstEntry { raw: "bad".into() }
    );
    assert!(matches!(
        solve(&["0,0", "1,1", "2,x", "3,3"]).unwrap_err(),
        GridError::MalformedEntry { line: 2, .. }
    ));
}

#[test]
fn single_point_grid() {
    let rec = solve(&["2.5,-1"]).unwrap();
    assert_eq!(rec.grid.dimension(), 1);
    assert_eq!(rec.grid.row_major(), &[p(2.5, -1.0)]);
    assert_eq!(rec.path, GridPath::Interpolated);
    assert_eq!(rec.alpha_degrees, 0.0);
}

#[test]
fn rotated_grid_recovers_lattice_and_angle() {
    for &(n, angle) in &[(2usize, 30.0), (3, 30.0), (4, 30.0), (5, 17.5), (6, 62.0)] {
        let cfg = SampleCfg {
            n,
            angle_deg: angle,
            ..SampleCfg::default()
        };
        let pts = draw_grid(&cfg, ReplayToken { seed: 11, index: n as u64 });
        let rec = reconstruct(to_lines(&pts), &GridCfg::default()).unwrap();
        assert_eq!(rec.path, GridPath::Interpolated);
        assert_eq!(rec.grid.row_major(), &expected_rows(&cfg)[..], "n={n} angle={angle}");
        assert_eq!(rec.alpha_degrees, angle);
    }
}

#[test]
fn sheared_grid_recovers_lattice() {
    let cfg = SampleCfg {
        n: 5,
        angle_deg: 20.0,
        shear: 0.2,
        origin: Point::new(100.0, -40.0),
        spacing: 3.0,
        ..SampleCfg::default()
    };
    let pts = draw_grid(&cfg, ReplayToken { seed: 1, index: 0 });
    let set = CoordinateSet::from_points(&pts).unwrap();
    let rec = reconstruct_from(&set, &GridCfg::default()).unwrap();
    assert_eq!(rec.grid.row_major(), &expected_rows(&cfg)[..]);
}

#[test]
fn jittered_grid_snaps_onto_observed_values() {
    let cfg = SampleCfg {
        n: 6,
        angle_deg: 25.0,
        jitter: 0.04,
        ..SampleCfg::default()
    };
    let tok = ReplayToken { seed: 77, index: 3 };
    let pts = draw_grid(&cfg, tok);
    let set = CoordinateSet::from_points(&pts).unwrap();
    assert!(!set.has_duplicates());
    let rec = reconstruct_from(&set, &GridCfg::default()).unwrap();
    assert_eq!(rec.grid.row_major().len(), 36);
    for q in rec.grid.row_major() {
        assert!(set.x_axis().contains(q.x) && set.y_axis().contains(q.y));
    }
    // Input order does not matter.
    let mut reversed = pts.clone();
    reversed.reverse();
    let rec2 = reconstruct_from(
        &CoordinateSet::from_points(&reversed).unwrap(),
        &GridCfg::default(),
    )
    .unwrap();
    assert_eq!(rec, rec2);
}

#[test]
fn input_order_does_not_change_result() {
    let cfg = SampleCfg {
        n: 4,
        angle_deg: 40.0,
        shuffle: false,
        ..SampleCfg::default()
    };
    let pts = draw_grid(&cfg, ReplayToken { seed: 0, index: 0 });
    let mut reversed = pts.clone();
    reversed.reverse();
    let a = reconstruct_from(&CoordinateSet::from_points(&pts).unwrap(), &GridCfg::default());
    let b = reconstruct_from(
        &CoordinateSet::from_points(&reversed).unwrap(),
        &GridCfg::default(),
    );
    assert_eq!(a.unwrap(), b.unwrap());
}

#[test]
fn zero_rotation_takes_fallback_with_same_layout() {
    let cfg = SampleCfg {
        n: 4,
        angle_deg: 0.0,
        spacing: 0.5,
        ..SampleCfg::default()
    };
    let pts = draw_grid(&cfg, ReplayToken { seed: 2, index: 0 });
    let rec = reconstruct(to_lines(&pts), &GridCfg::default()).unwrap();
    assert_eq!(rec.path, GridPath::AxisAligned);
    assert_eq!(rec.grid.row_major(), &expected_rows(&cfg)[..]);
}

#[test]
fn custom_separator_and_precision() {
    let cfg = GridCfg {
        separator: ';',
        angle_decimals: 3,
    };
    // Rotated by atan(1/2): the bottom edge runs from (0,0) to (2,1).
    let rec = reconstruct(["0;0", "2;1", "-1;2", "1;3"], &cfg).unwrap();
    assert_eq!(rec.path, GridPath::Interpolated);
    assert_eq!(rec.alpha_degrees, 26.565);
    assert_eq!(
        rec.grid.row_major(),
        &[p(-1.0, 2.0), p(1.0, 3.0), p(0.0, 0.0), p(2.0, 1.0)]
    );
}

#[test]
fn dimension_of_square_counts() {
    assert_eq!(dimension_of(1), Ok(1));
    assert_eq!(dimension_of(16), Ok(4));
    assert_eq!(dimension_of(10_000), Ok(100));
    assert_eq!(dimension_of(15), Err(GridError::InvalidDimension { count: 15 }));
    assert_eq!(dimension_of(0), Err(GridError::EmptyInput));
}

#[test]
#[should_panic(expected = "n² entries")]
fn columns_from_rows_rejects_wrong_length() {
    let _ = columns_from_rows(2, &[1, 2, 3]);
}

proptest! {
    #[test]
    fn columns_are_transpose_of_rows(n in 0usize..9, seed in any::<u64>()) {
        let data: Vec<u64> = (0..(n * n) as u64).map(|k| k.wrapping_mul(seed | 1)).collect();
        let cols = columns_from_rows(n, &data);
        prop_assert_eq!(cols.len(), n);
        for (c, col) in cols.iter().enumerate() {
            prop_assert_eq!(col.len(), n);
            for (r, v) in col.iter().enumerate() {
                prop_assert_eq!(*v, data[r * n + c]);
            }
        }
    }

    #[test]
    fn rotated_grids_never_invent_points(
        n in 2usize..7,
        angle in 5.0f64..85.0,
        seed in any::<u64>(),
    ) {
        let cfg = SampleCfg { n, angle_deg: angle, ..SampleCfg::default() };
        let pts = draw_grid(&cfg, ReplayToken { seed, index: 0 });
        let set = CoordinateSet::from_points(&pts).unwrap();
        prop_assume!(!set.has_duplicates());
        let rec = reconstruct_from(&set, &GridCfg::default()).unwrap();
        let mut got: Vec<(u64, u64)> =
            rec.grid.row_major().iter().map(|q| (q.x.to_bits(), q.y.to_bits())).collect();
        let mut want: Vec<(u64, u64)> =
            pts.iter().map(|q| (q.x.to_bits(), q.y.to_bits())).collect();
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }
}
