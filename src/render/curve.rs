//! Quadratic Bézier curves for tile edges
//!
//! Each edge bends toward the middle of the square: the control node is the
//! endpoint sum plus a fixed pull, divided by three.

use ndarray::{Array2, array};
use num_traits::{Float, NumCast};

use crate::io::configuration::CONTROL_PULL;
use crate::io::error::{Result, TilingError};
use crate::matching::edge::{Edge, Point};
use crate::render::layout::Layout;

/// Quadratic Bézier curve with nodes stored column-wise (row 0 = x, row 1 = y)
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticBezier<T> {
    nodes: Array2<T>,
}

impl<T: Float> QuadraticBezier<T> {
    /// Create a curve from start, control and end nodes
    pub fn new(start: [T; 2], control: [T; 2], end: [T; 2]) -> Self {
        Self {
            nodes: array![
                [start[0], control[0], end[0]],
                [start[1], control[1], end[1]]
            ],
        }
    }

    /// Node matrix, shape `(2, 3)`
    pub const fn nodes(&self) -> &Array2<T> {
        &self.nodes
    }

    /// Point at parameter `s` in `[0, 1]`
    pub fn evaluate(&self, s: T) -> [T; 2] {
        let one = T::one();
        let rest = one - s;
        let weights = [rest * rest, (one + one) * rest * s, s * s];

        let mut point = [T::zero(); 2];
        for (axis, coordinate) in point.iter_mut().enumerate() {
            *coordinate = weights
                .iter()
                .enumerate()
                .filter_map(|(node, &weight)| {
                    self.nodes.get((axis, node)).map(|&value| value * weight)
                })
                .fold(T::zero(), |acc, term| acc + term);
        }
        point
    }

    /// `count` evenly spaced points from start to end inclusive
    pub fn sample(&self, count: usize) -> Vec<[T; 2]> {
        match count {
            0 => Vec::new(),
            1 => vec![self.evaluate(T::zero())],
            _ => {
                let Some(last) = <T as NumCast>::from(count - 1) else {
                    return Vec::new();
                };
                (0..count)
                    .filter_map(<T as NumCast>::from)
                    .map(|step| self.evaluate(step / last))
                    .collect()
            }
        }
    }
}

fn locate(layout: &Layout, point: Point) -> Result<[f64; 2]> {
    layout.position(point).ok_or(TilingError::InvalidPoint {
        point,
        point_count: layout.point_count(),
    })
}

/// Curve drawn for one edge of a tile
///
/// # Errors
///
/// Returns an error if either endpoint has no coordinate in `layout`
pub fn edge_curve(layout: &Layout, edge: Edge) -> Result<QuadraticBezier<f64>> {
    let start = locate(layout, edge.first())?;
    let end = locate(layout, edge.second())?;
    let control = [
        (start[0] + end[0] + CONTROL_PULL) / 3.0,
        (start[1] + end[1] + CONTROL_PULL) / 3.0,
    ];
    Ok(QuadraticBezier::new(start, control, end))
}
