//! Perfect matching enumeration
//!
//! This module contains the tile model and its generator:
//! - Point labels and edges
//! - Tiles as ordered edge lists with key rendering
//! - Recursive enumeration of every perfect matching

/// Point labels and edges
pub mod edge;
/// Recursive perfect matching enumeration
pub mod generator;
/// Bitset over point labels for coverage checks
pub mod point_set;
/// Tiles and their string keys
pub mod tile;

pub use edge::{Edge, Point};
pub use point_set::PointSet;
pub use tile::Tile;
