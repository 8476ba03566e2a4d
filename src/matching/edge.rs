//! Point labels and edges between them

use std::fmt;

/// A point label in `[0, n)`
pub type Point = u8;

/// A pair of distinct points joined by one curve of a tile
///
/// Endpoints keep the order they were given in. Use [`Edge::oriented`] to
/// compare edges as unordered pairs. The derived ordering sorts by first
/// endpoint, then second, which on oriented edges is the ordering used for
/// tile keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    first: Point,
    second: Point,
}

impl Edge {
    /// Create an edge from two endpoints, keeping their order
    pub const fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// First endpoint as given
    pub const fn first(&self) -> Point {
        self.first
    }

    /// Second endpoint as given
    pub const fn second(&self) -> Point {
        self.second
    }

    /// Reorder the endpoints so the smaller label comes first
    #[must_use]
    pub const fn oriented(&self) -> Self {
        if self.first <= self.second {
            *self
        } else {
            Self::new(self.second, self.first)
        }
    }

    /// Relabel both endpoints through `map`, keeping endpoint order
    #[must_use]
    pub fn map(&self, mut map: impl FnMut(Point) -> Point) -> Self {
        Self::new(map(self.first), map(self.second))
    }
}

impl From<(Point, Point)> for Edge {
    fn from((first, second): (Point, Point)) -> Self {
        Self::new(first, second)
    }
}

/// Renders as `a,b`, the per-edge fragment of a tile key
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}
