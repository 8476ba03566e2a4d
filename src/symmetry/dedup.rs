//! Reduction of an enumerated tile list to one tile per rotation class
//!
//! Entries are kept in the order their keys were first seen. Which tile
//! represents a class depends on [`Retention`]: by default a later tile with
//! the same key overwrites the stored one in place, so the last enumerated
//! member of each class is kept.

use std::collections::HashMap;

use crate::matching::tile::Tile;
use crate::symmetry::canonical::{CanonicalKey, canonical_key};
use crate::symmetry::rotation::Rotation;

/// Which member of a rotation class is kept as its representative
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Retention {
    /// Later duplicates overwrite earlier ones
    #[default]
    Last,
    /// The first tile seen for a key is kept
    First,
}

/// One retained tile with its class key and class size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileEntry {
    /// Canonical key of the class
    pub key: CanonicalKey,
    /// Retained representative
    pub tile: Tile,
    /// Number of inserted tiles that shared this key
    pub multiplicity: usize,
}

/// Insertion-ordered map from canonical key to representative tile
#[derive(Clone, Debug, Default)]
pub struct TileCollection {
    entries: Vec<TileEntry>,
    positions: HashMap<CanonicalKey, usize>,
    retention: Retention,
}

impl TileCollection {
    /// Create an empty collection with the given retention policy
    pub fn new(retention: Retention) -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            retention,
        }
    }

    /// Store `tile` under `key`
    ///
    /// A new key is appended. An existing key keeps its position; its tile
    /// is replaced under [`Retention::Last`]. Returns `true` for a new key.
    pub fn insert(&mut self, key: CanonicalKey, tile: Tile) -> bool {
        if let Some(entry) = self
            .positions
            .get(&key)
            .and_then(|&position| self.entries.get_mut(position))
        {
            entry.multiplicity += 1;
            if self.retention == Retention::Last {
                entry.tile = tile;
            }
            return false;
        }

        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(TileEntry {
            key,
            tile,
            multiplicity: 1,
        });
        true
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained tile at a position
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.entries.get(index).map(|entry| &entry.tile)
    }

    /// Retained tile for a key
    pub fn get_by_key(&self, key: &CanonicalKey) -> Option<&Tile> {
        self.positions
            .get(key)
            .and_then(|&position| self.get(position))
    }

    /// Entries in first-insertion order
    pub fn entries(&self) -> &[TileEntry] {
        &self.entries
    }

    /// Retained tiles in first-insertion order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.entries.iter().map(|entry| &entry.tile)
    }

    /// Keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Policy used when a key repeats
    pub const fn retention(&self) -> Retention {
        self.retention
    }

    /// Total number of tiles inserted, duplicates included
    pub fn inserted(&self) -> usize {
        self.entries.iter().map(|entry| entry.multiplicity).sum()
    }

    /// Consume the collection, keeping only the tiles
    pub fn into_tiles(self) -> Vec<Tile> {
        self.entries.into_iter().map(|entry| entry.tile).collect()
    }
}

/// Computes canonical keys and deduplicates tile lists under one rotation
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    rotation: Rotation,
    retention: Retention,
}

impl Canonicalizer {
    /// Create a canonicalizer for `rotation`
    pub const fn new(rotation: Rotation, retention: Retention) -> Self {
        Self {
            rotation,
            retention,
        }
    }

    /// Rotation the keys are invariant under
    pub const fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Canonical key of one tile
    pub fn key(&self, tile: &Tile) -> CanonicalKey {
        canonical_key(tile, &self.rotation)
    }

    /// Keep one tile per rotation class, in enumeration order of first sight
    pub fn deduplicate<I>(&self, tiles: I) -> TileCollection
    where
        I: IntoIterator<Item = Tile>,
    {
        self.deduplicate_observed(tiles, || ())
    }

    /// Same as [`Self::deduplicate`], calling `on_tile` after each insert
    pub fn deduplicate_observed<I, F>(&self, tiles: I, mut on_tile: F) -> TileCollection
    where
        I: IntoIterator<Item = Tile>,
        F: FnMut(),
    {
        let mut collection = TileCollection::new(self.retention);
        for tile in tiles {
            let key = self.key(&tile);
            collection.insert(key, tile);
            on_tile();
        }
        tracing::debug!(
            inserted = collection.inserted(),
            classes = collection.len(),
            retention = ?self.retention,
            "deduplicated tiles by rotation class"
        );
        collection
    }
}
