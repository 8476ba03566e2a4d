//! Enumeration of perfect-matching tiles and their reduction under rotation
//!
//! Eight points sit on the boundary of a square, two per side. A tile pairs
//! them into four disjoint edges. The crate enumerates all 105 such tiles,
//! keeps one per quarter-turn rotation class, and draws the survivors as a
//! grid of curved-stroke cells.

#![forbid(unsafe_code)]

/// Command-line interface, configuration and output
pub mod io;
/// Perfect matching model and enumeration
pub mod matching;
/// Tile layout, edge curves and sheet rasterization
pub mod render;
/// Rotation symmetry, canonical keys and deduplication
pub mod symmetry;

pub use io::error::{Result, TilingError};
