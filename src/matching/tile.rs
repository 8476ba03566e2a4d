//! Tiles: perfect matchings stored as ordered edge lists
//!
//! A tile keeps its edges in construction order. Keys and edge-set
//! comparisons go through [`Tile::normalized`], which orients every edge and
//! sorts them, so two tiles describing the same pairing compare equal there
//! regardless of how they were built.

use std::fmt;

use crate::matching::edge::{Edge, Point};
use crate::matching::point_set::PointSet;

/// Separator between edge fragments in a tile key
pub const KEY_SEPARATOR: &str = " ";

/// A set of disjoint edges, built to cover every point exactly once
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    edges: Vec<Edge>,
}

impl Tile {
    /// The empty matching over zero points
    pub const fn empty() -> Self {
        Self { edges: Vec::new() }
    }

    /// Build a tile from edges in the given order
    pub const fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Edges in stored order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Test if the tile has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Prepend an edge, used when a recursive sub-matching is extended
    #[must_use]
    pub fn prefixed(self, edge: Edge) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.push(edge);
        edges.extend(self.edges);
        Self { edges }
    }

    /// Relabel every endpoint through `map`, keeping edge order
    #[must_use]
    pub fn map_points(&self, mut map: impl FnMut(Point) -> Point) -> Self {
        Self {
            edges: self.edges.iter().map(|edge| edge.map(&mut map)).collect(),
        }
    }

    /// Orient every edge without reordering
    #[must_use]
    pub fn oriented(&self) -> Self {
        Self {
            edges: self.edges.iter().map(Edge::oriented).collect(),
        }
    }

    /// Orient every edge and sort by smaller endpoint, then larger
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut edges: Vec<Edge> = self.edges.iter().map(Edge::oriented).collect();
        edges.sort_unstable();
        Self { edges }
    }

    /// Test whether two tiles contain the same unordered edges
    pub fn same_edges(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }

    /// Join the edges in stored order as `a,b c,d ...`
    ///
    /// Stored order matters; call on a normalized tile for an
    /// order-independent key.
    pub fn key(&self) -> String {
        self.edges
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(KEY_SEPARATOR)
    }

    /// Check that the edges cover `[0, point_count)` exactly once
    ///
    /// Fails on repeated endpoints, self-loops, labels out of range and
    /// uncovered points.
    pub fn is_perfect_matching(&self, point_count: usize) -> bool {
        if self.edges.len() * 2 != point_count {
            return false;
        }
        let mut covered = PointSet::new(point_count);
        self.edges
            .iter()
            .all(|edge| covered.insert(edge.first()) && covered.insert(edge.second()))
            && covered.is_full()
    }
}

impl From<Vec<(Point, Point)>> for Tile {
    fn from(pairs: Vec<(Point, Point)>) -> Self {
        Self::from_edges(pairs.into_iter().map(Edge::from).collect())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .edges
            .iter()
            .map(|edge| format!("({edge})"))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
