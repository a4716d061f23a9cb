//! Sorted scalar index with nearest-value lookup.
//!
//! Used to snap interpolated coordinates back onto values that actually occur
//! in the input. One index is kept per axis.
//!
//! Invariants
//! - Values are non-decreasing after every insertion.
//! - Duplicates are stored as given (no dedup on insert).
//! - `find_closest` breaks exact distance ties toward the smaller value, so
//!   snapping is reproducible.

/// Ascending sequence of `f64` with `insert` and `find_closest`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NearestValueIndex {
    values: Vec<f64>,
}

impl NearestValueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            values: Vec::with_capacity(cap),
        }
    }

    /// Insert `value` at its sorted position (after any equal values).
    pub fn insert(&mut self, value: f64) {
        let mut lo = 0usize;
        let mut hi = self.values.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.values[mid] <= value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        self.values.insert(lo, value);
    }

    /// Stored value closest to `target`; ties go to the smaller value.
    ///
    /// Returns `None` only when the index is empty.
    pub fn find_closest(&self, target: f64) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        // idx = number of stored values strictly less than target
        let idx = self.lower_bound(target);
        if idx < self.values.len() && self.values[idx] == target {
            return Some(target);
        }
        if idx == 0 {
            return Some(self.values[0]);
        }
        if idx == self.values.len() {
            return Some(self.values[idx - 1]);
        }
        let left = self.values[idx - 1];
        let right = self.values[idx];
        if (left - target).abs() <= (right - target).abs() {
            Some(left)
        } else {
            Some(right)
        }
    }

    /// Exact membership via binary search.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        let idx = self.lower_bound(value);
        idx < self.values.len() && self.values[idx] == value
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn lower_bound(&self, target: f64) -> usize {
        let mut lo = 0usize;
        let mut hi = self.values.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.values[mid] < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl FromIterator<f64> for NearestValueIndex {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut index = NearestValueIndex::new();
        for v in iter {
            index.insert(v);
        }
        index
    }
}
