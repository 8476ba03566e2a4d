//! Quarter-turn relabeling of tile points

use crate::io::configuration::{POINT_COUNT, ROTATION_STEP};
use crate::io::error::{Result, invalid_parameter};
use crate::matching::edge::Point;
use crate::matching::point_set::PointSet;
use crate::matching::tile::Tile;

/// A permutation of point labels representing one quarter-turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    permutation: Vec<Point>,
}

impl Rotation {
    /// Shift every label by `step` around a ring of `point_count` points
    ///
    /// Counts beyond the label range are clamped like
    /// [`point_labels`](crate::matching::generator::point_labels).
    pub fn cyclic_shift(point_count: usize, step: usize) -> Self {
        let point_count = point_count.min(usize::from(Point::MAX) + 1);
        let step = step.checked_rem(point_count).unwrap_or(0);
        let permutation = (0..point_count)
            .filter_map(|label| Point::try_from((label + step) % point_count).ok())
            .collect();
        Self { permutation }
    }

    /// The quarter-turn of the eight-point square layout
    pub fn quarter_turn() -> Self {
        Self::cyclic_shift(POINT_COUNT, ROTATION_STEP)
    }

    /// Build a rotation from an explicit image table
    ///
    /// Entry `i` is the label that point `i` moves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not a permutation of `[0, len)`
    pub fn from_permutation(permutation: Vec<Point>) -> Result<Self> {
        let mut seen = PointSet::new(permutation.len());
        for &image in &permutation {
            if !seen.insert(image) {
                return Err(invalid_parameter(
                    "permutation",
                    &format!("{permutation:?}"),
                    &format!("label {image} is repeated or out of range"),
                ));
            }
        }
        Ok(Self { permutation })
    }

    /// Number of labels the rotation acts on
    pub fn point_count(&self) -> usize {
        self.permutation.len()
    }

    /// Image table, indexed by label
    pub fn permutation(&self) -> &[Point] {
        &self.permutation
    }

    /// Image of one label
    ///
    /// Labels outside the table are fixed points.
    pub fn apply(&self, point: Point) -> Point {
        self.permutation
            .get(usize::from(point))
            .copied()
            .unwrap_or(point)
    }

    /// Rotate every endpoint of every edge, keeping edge and endpoint order
    pub fn turn(&self, tile: &Tile) -> Tile {
        tile.map_points(|point| self.apply(point))
    }

    /// Smallest `k >= 1` for which `k` turns return every label to itself
    pub fn order(&self) -> usize {
        let mut order = 1;
        let mut current = self.permutation.clone();
        while !current
            .iter()
            .enumerate()
            .all(|(label, &image)| usize::from(image) == label)
        {
            current = current.iter().map(|&point| self.apply(point)).collect();
            order += 1;
        }
        order
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::quarter_turn()
    }
}
