//! Point label to plane coordinate mapping

use ndarray::Array2;

use crate::io::configuration::POINT_COORDINATES;
use crate::matching::edge::Point;

/// Axis-aligned bounds of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimum coordinates (inclusive)
    pub min: [f64; 2],
    /// Maximum coordinates (inclusive)
    pub max: [f64; 2],
}

impl Extent {
    /// Horizontal span
    pub const fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    /// Vertical span
    pub const fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    /// Larger of width and height
    pub fn span(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Plane coordinates of each point label, one row per label
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    coordinates: Array2<f64>,
}

impl Layout {
    /// Eight points on the boundary of a 3x3 square, two per side,
    /// clockwise from the lower point of the left side
    pub fn square_ring() -> Self {
        Self::from_coordinates(&POINT_COORDINATES)
    }

    /// Build a layout from `[x, y]` pairs indexed by label
    pub fn from_coordinates(points: &[[f64; 2]]) -> Self {
        let coordinates = Array2::from_shape_fn((points.len(), 2), |(row, axis)| {
            points
                .get(row)
                .and_then(|point| point.get(axis))
                .copied()
                .unwrap_or(0.0)
        });
        Self { coordinates }
    }

    /// Number of labels with a coordinate
    pub fn point_count(&self) -> usize {
        self.coordinates.nrows()
    }

    /// Coordinate matrix, shape `(point_count, 2)`
    pub const fn coordinates(&self) -> &Array2<f64> {
        &self.coordinates
    }

    /// Coordinate of one label
    pub fn position(&self, point: Point) -> Option<[f64; 2]> {
        let row = usize::from(point);
        let x = self.coordinates.get((row, 0))?;
        let y = self.coordinates.get((row, 1))?;
        Some([*x, *y])
    }

    /// Bounds of all positions; a zero extent at the origin when empty
    pub fn extent(&self) -> Extent {
        if self.point_count() == 0 {
            return Extent {
                min: [0.0; 2],
                max: [0.0; 2],
            };
        }

        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for (axis, column) in self.coordinates.columns().into_iter().enumerate() {
            if let (Some(lo), Some(hi)) = (min.get_mut(axis), max.get_mut(axis)) {
                *lo = column.fold(f64::INFINITY, |acc, &value| acc.min(value));
                *hi = column.fold(f64::NEG_INFINITY, |acc, &value| acc.max(value));
            }
        }
        Extent { min, max }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::square_ring()
    }
}
