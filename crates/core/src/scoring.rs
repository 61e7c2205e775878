//! Scoring module - per-push merge accounting
//!
//! A push never touches cumulative game score. Each call threads a fresh
//! [`MergeTally`] through the row pipeline and hands it back with the result,
//! so the engine itself holds no scratch state between calls.
//!
//! Rules applied by `combine`:
//! - Equal pair: credits the merged sum, but only when it is positive
//!   (two reducible tiles still fuse, they just do not score).
//! - Opposite pair (`a == -b`): credits nothing, marks a reduction.

use crate::types::Tile;

/// Points and reduction flag collected during one push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeTally {
    /// Score delta accumulated from equal-value merges
    pub points: u64,
    /// Whether any opposite-sign pair cancelled out
    pub reduced: bool,
}

impl MergeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an equal-value merge producing `sum`
    pub fn record_merge(&mut self, sum: Tile) {
        if sum > 0 {
            self.points = self.points.saturating_add(sum as u64);
        }
    }

    /// Record an opposite-sign cancellation
    pub fn record_reduction(&mut self) {
        self.reduced = true;
    }
}
