//! Rotation symmetry and deduplication of tiles
//!
//! This module contains:
//! - The quarter-turn permutation of point labels
//! - Rotation-invariant canonical keys and orbits
//! - Insertion-ordered deduplication by canonical key

/// Rotation-invariant keys, orbits and orbit sizes
pub mod canonical;
/// Deduplication into an insertion-ordered tile collection
pub mod dedup;
/// Quarter-turn label permutation
pub mod rotation;

pub use canonical::{CanonicalKey, canonical_key};
pub use dedup::{Canonicalizer, Retention, TileCollection};
pub use rotation::Rotation;
