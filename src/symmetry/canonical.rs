//! Rotation-invariant tile keys
//!
//! A tile's canonical key is the lexicographically smallest normalized key
//! among its quarter-turn images. Every tile in a rotation orbit sees the
//! same four images in a different cyclic order, so the minimum agrees
//! across the orbit.

use std::fmt;

use crate::io::configuration::QUARTER_TURNS;
use crate::matching::tile::Tile;
use crate::symmetry::rotation::Rotation;

/// Identifier shared by all tiles in one rotation orbit
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Key text, edges as `a,b` joined by single spaces
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four normalized quarter-turn images of a tile, starting with itself
pub fn rotations(tile: &Tile, rotation: &Rotation) -> Vec<Tile> {
    let mut images = Vec::with_capacity(QUARTER_TURNS);
    let mut current = tile.normalized();
    for _ in 0..QUARTER_TURNS {
        let next = rotation.turn(&current).normalized();
        images.push(current);
        current = next;
    }
    images
}

/// Rotation-invariant key of a tile
pub fn canonical_key(tile: &Tile, rotation: &Rotation) -> CanonicalKey {
    let smallest = rotations(tile, rotation)
        .iter()
        .map(Tile::key)
        .min()
        .unwrap_or_default();
    CanonicalKey(smallest)
}

/// Distinct normalized rotation images, in turn order
pub fn orbit(tile: &Tile, rotation: &Rotation) -> Vec<Tile> {
    let mut distinct: Vec<Tile> = Vec::with_capacity(QUARTER_TURNS);
    for image in rotations(tile, rotation) {
        if !distinct.contains(&image) {
            distinct.push(image);
        }
    }
    distinct
}

/// Number of distinct tiles reachable by turning, 1, 2 or 4
pub fn orbit_size(tile: &Tile, rotation: &Rotation) -> usize {
    orbit(tile, rotation).len()
}

/// Test whether `other` is some quarter-turn of `tile`
pub fn is_rotation_of(tile: &Tile, other: &Tile, rotation: &Rotation) -> bool {
    let target = other.normalized();
    rotations(tile, rotation).contains(&target)
}
