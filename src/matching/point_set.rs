use bitvec::prelude::*;

use crate::matching::edge::Point;

/// Fixed-size bitset over point labels
///
/// Uses 0-based indexing matching point labels. Inserts report whether the
/// label was newly added so callers can detect repeated points in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    bits: BitVec,
    point_count: usize,
}

impl PointSet {
    /// Create a set with no points present
    pub fn new(point_count: usize) -> Self {
        Self {
            bits: bitvec![0; point_count],
            point_count,
        }
    }

    /// Insert a point label
    ///
    /// Returns `false` if the label is out of range or already present
    pub fn insert(&mut self, point: Point) -> bool {
        let index = usize::from(point);
        if index >= self.point_count || self.contains(point) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test point membership
    pub fn contains(&self, point: Point) -> bool {
        self.bits.get(usize::from(point)).as_deref() == Some(&true)
    }

    /// Test if every label in range is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }
}
