//! Recursive enumeration of perfect matchings
//!
//! The first point is paired with each later point in turn, and every
//! matching of what remains is prefixed with that edge. Output order is
//! therefore fixed by input order: the partner of the head varies slowest.
//! Deduplication downstream depends on this order when choosing which
//! representative to keep.

use crate::matching::edge::{Edge, Point};
use crate::matching::tile::Tile;

/// Enumerate every perfect matching over `points`
///
/// An empty slice yields one empty tile. An odd number of points yields no
/// tiles, since the last point has no partner. Labels are assumed distinct.
pub fn make_tiles(points: &[Point]) -> Vec<Tile> {
    let Some((&head, rest)) = points.split_first() else {
        return vec![Tile::empty()];
    };

    let mut tiles = Vec::new();
    for &other in rest {
        let edge = Edge::new(head, other);
        let remaining: Vec<Point> = rest.iter().copied().filter(|&p| p != other).collect();
        tiles.extend(
            make_tiles(&remaining)
                .into_iter()
                .map(|sub_tile| sub_tile.prefixed(edge)),
        );
    }
    tiles
}

/// Labels `0..point_count` in ascending order
///
/// Counts beyond the label range are clamped to the largest representable
/// label set.
pub fn point_labels(point_count: usize) -> Vec<Point> {
    (0..=Point::MAX).take(point_count).collect()
}

/// Enumerate all tiles over labels `0..point_count`
pub fn enumerate_tiles(point_count: usize) -> Vec<Tile> {
    let tiles = make_tiles(&point_labels(point_count));
    tracing::debug!(point_count, tiles = tiles.len(), "enumerated perfect matchings");
    tiles
}

/// Number of perfect matchings on `point_count` points, `(n-1)!!`
///
/// Zero for odd counts, matching what [`make_tiles`] produces.
pub fn perfect_matching_count(point_count: usize) -> usize {
    if point_count % 2 == 1 {
        return 0;
    }
    (1..point_count).step_by(2).product()
}
