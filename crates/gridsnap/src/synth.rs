//! Synthetic N×N grids (rotation, shear, jitter, shuffle) with replay tokens.
//!
//! Purpose
//! - Deterministic sample inputs for tests, benches, and the CLI `sample`
//!   command. The same `(cfg, token)` pair always yields the same points.
//!
//! Model
//! - Lattice point `(i, j)` is `origin + R(angle) · S(shear) · (j·spacing, i·spacing)`,
//!   with `i` counting rows upward and `j` columns rightward.
//! - Optional uniform jitter in `[-jitter·spacing, jitter·spacing]` per axis.
//! - Optional shuffle so the input order carries no row information.

use nalgebra::{Matrix2, Vector2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Sample grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Points per side.
    pub n: usize,
    pub spacing: f64,
    /// Counter-clockwise rotation in degrees.
    pub angle_deg: f64,
    /// Horizontal shear factor applied before rotation.
    pub shear: f64,
    pub origin: Point,
    /// Jitter amplitude as a fraction of `spacing`. 0 disables jitter.
    pub jitter: f64,
    pub shuffle: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            n: 4,
            spacing: 1.0,
            angle_deg: 30.0,
            shear: 0.0,
            origin: Vector2::zeros(),
            jitter: 0.0,
            shuffle: true,
        }
    }
}

impl SampleCfg {
    /// Linear part `R(angle) · S(shear)`.
    pub fn transform(&self) -> Matrix2<f64> {
        let (s, c) = self.angle_deg.to_radians().sin_cos();
        let rot = Matrix2::new(c, -s, s, c);
        let shear = Matrix2::new(1.0, self.shear, 0.0, 1.0);
        rot * shear
    }

    /// Exact (jitter-free) position of lattice point `(i, j)`.
    pub fn lattice_point(&self, i: usize, j: usize) -> Point {
        let local = Vector2::new(j as f64 * self.spacing, i as f64 * self.spacing);
        self.origin + self.transform() * local
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index).
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw the `n²` points of a sample grid.
///
/// Without shuffle the order is row-major from the bottom row: index `i * n + j`.
pub fn draw_grid(cfg: &SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let amp = cfg.jitter.max(0.0) * cfg.spacing.abs();
    let m = cfg.transform();
    let mut pts = Vec::with_capacity(cfg.n * cfg.n);
    for i in 0..cfg.n {
        for j in 0..cfg.n {
            let local = Vector2::new(j as f64 * cfg.spacing, i as f64 * cfg.spacing);
            let mut p = cfg.origin + m * local;
            if amp > 0.0 {
                p += Vector2::new(rng.gen_range(-amp..=amp), rng.gen_range(-amp..=amp));
            }
            pts.push(p);
        }
    }
    if cfg.shuffle {
        pts.shuffle(&mut rng);
    }
    pts
}

/// Render points as `x,y` entries that parse back to the same values.
pub fn to_lines(points: &[Point]) -> Vec<String> {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect()
}
