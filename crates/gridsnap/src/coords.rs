//! Parsed coordinate batch: points, per-axis indices, corners, duplicate flag.
//!
//! Built once from raw `x,y` entries and read-only afterwards. The first entry
//! seeds the four corners; every entry (the first included) then feeds the
//! per-axis seen sets and nearest-value indices.
//!
//! Duplicate detection runs on each axis independently: a repeated `y` flags the
//! batch even when its `x` is new, and vice versa.

use std::collections::HashSet;

use crate::error::GridError;
use crate::index::NearestValueIndex;
use crate::types::{GridCfg, Point};

/// Points holding the extreme value on each axis.
///
/// Strict comparisons keep the earliest-seen point on ties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub x_min: Point,
    pub x_max: Point,
    pub y_min: Point,
    pub y_max: Point,
}

impl Corners {
    #[inline]
    fn seeded(p: Point) -> Self {
        Self {
            x_min: p,
            x_max: p,
            y_min: p,
            y_max: p,
        }
    }

    #[inline]
    fn update(&mut self, p: Point) {
        if p.x < self.x_min.x {
            self.x_min = p;
        }
        if p.x > self.x_max.x {
            self.x_max = p;
        }
        if p.y < self.y_min.y {
            self.y_min = p;
        }
        if p.y > self.y_max.y {
            self.y_max = p;
        }
    }
}

/// Values observed on one axis: exact-membership set plus sorted index.
#[derive(Clone, Debug, Default)]
pub struct AxisValues {
    seen: HashSet<u64>,
    index: NearestValueIndex,
}

impl AxisValues {
    /// Record `v`; returns `false` if the value was already seen.
    fn record(&mut self, v: f64) -> bool {
        let fresh = self.seen.insert(value_key(v));
        self.index.insert(v);
        fresh
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.seen.contains(&value_key(v))
    }

    /// Snap `raw` onto an observed value; exact members pass through untouched.
    #[inline]
    pub fn snap(&self, raw: f64) -> f64 {
        if self.contains(raw) {
            return raw;
        }
        // Never empty once a batch is built.
        self.index.find_closest(raw).unwrap_or(raw)
    }

    #[inline]
    pub fn index(&self) -> &NearestValueIndex {
        &self.index
    }

    /// Number of distinct values seen.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.seen.len()
    }
}

// 0.0 and -0.0 compare equal, so they must share a key.
#[inline]
fn value_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

/// Parse one `x<sep>y` entry into a point; `None` if malformed or non-finite.
pub fn parse_entry(raw: &str, separator: char) -> Option<Point> {
    let mut fields = raw.trim().split(separator);
    let x = parse_field(fields.next()?)?;
    let y = parse_field(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

#[inline]
fn parse_field(field: &str) -> Option<f64> {
    let v: f64 = field.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Immutable batch of input points with axis indices and corner points.
#[derive(Clone, Debug)]
pub struct CoordinateSet {
    points: Vec<Point>,
    x: AxisValues,
    y: AxisValues,
    corners: Corners,
    has_duplicates: bool,
}

impl CoordinateSet {
    /// Parse entries with the default `,` separator.
    pub fn parse<I, S>(entries: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with(entries, &GridCfg::default())
    }

    /// Parse entries in order. Any malformed entry fails the whole batch.
    pub fn parse_with<I, S>(entries: I, cfg: &GridCfg) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = entries.into_iter();
        let first = entries.next().ok_or(GridError::EmptyInput)?;
        let first = first.as_ref();
        let seed = parse_entry(first, cfg.separator).ok_or_else(|| {
            GridError::MalformedFirstEntry {
                raw: first.to_string(),
            }
        })?;
        let mut set = Self::seeded(seed);
        for (offset, raw) in entries.enumerate() {
            let raw = raw.as_ref();
            let p = parse_entry(raw, cfg.separator).ok_or_else(|| GridError::MalformedEntry {
                line: offset + 1,
                raw: raw.to_string(),
            })?;
            set.push(p);
        }
        tracing::debug!(
            points = set.points.len(),
            duplicates = set.has_duplicates,
            "coordinates parsed"
        );
        Ok(set)
    }

    /// Build directly from points (first point seeds the corners). `None` if empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut set = Self::seeded(first);
        for &p in rest {
            set.push(p);
        }
        Some(set)
    }

    fn seeded(first: Point) -> Self {
        let mut set = Self {
            points: Vec::new(),
            x: AxisValues::default(),
            y: AxisValues::default(),
            corners: Corners::seeded(first),
            has_duplicates: false,
        };
        set.push(first);
        set
    }

    fn push(&mut self, p: Point) {
        let fresh_x = self.x.record(p.x);
        let fresh_y = self.y.record(p.y);
        if !(fresh_x && fresh_y) && !self.has_duplicates {
            tracing::debug!(x = p.x, y = p.y, "duplicate axis value");
            self.has_duplicates = true;
        }
        self.corners.update(p);
        self.points.push(p);
    }

    /// Points in input order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    #[inline]
    pub fn has_duplicates(&self) -> bool {
        self.has_duplicates
    }

    #[inline]
    pub fn x_axis(&self) -> &AxisValues {
        &self.x
    }

    #[inline]
    pub fn y_axis(&self) -> &AxisValues {
        &self.y
    }

    /// Snap an interpolated position onto observed values, axis by axis.
    #[inline]
    pub fn snap(&self, raw: Point) -> Point {
        Point::new(self.x.snap(raw.x), self.y.snap(raw.y))
    }
}
