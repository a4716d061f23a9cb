//! Grid reconstruction from unordered point clouds.
//!
//! Takes the `x,y` entries of a square N×N point grid in arbitrary order and
//! recovers its rows and columns, including rotated or sheared grids, plus the
//! grid's orientation angle.
//!
//! Pipeline
//! - `coords::CoordinateSet`: parse entries, index each axis, track corners and
//!   duplicate axis values.
//! - `grid::reconstruct_from`: corner interpolation with snapping onto observed
//!   values, or the axis-aligned fallback when duplicates are present.
//! - `angle::orientation_angle`: bottom-edge angle in degrees.
//!
//! The crate does no I/O; file reading and presentation live in the CLI crate.

pub mod angle;
pub mod coords;
pub mod error;
pub mod grid;
pub mod index;
pub mod synth;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GridError;
pub use grid::{columns_from_rows, reconstruct, reconstruct_from, GridPath, Reconstruction};
pub use index::NearestValueIndex;
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use types::{Grid, GridCfg, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::orientation_angle;
    pub use crate::coords::{CoordinateSet, Corners};
    pub use crate::grid::{columns_from_rows, reconstruct, reconstruct_from, GridPath, Reconstruction};
    pub use crate::synth::{draw_grid, to_lines, ReplayToken, SampleCfg};
    pub use crate::{Grid, GridCfg, GridError, NearestValueIndex, Point};
}
