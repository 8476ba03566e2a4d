//! Plain-text listing of retained tiles

use crate::symmetry::canonical::orbit_size;
use crate::symmetry::dedup::{TileCollection, TileEntry};
use crate::symmetry::rotation::Rotation;

/// Format one listing line
///
/// Columns: position, canonical key, orbit size, multiplicity, retained edges.
pub fn format_entry(index: usize, entry: &TileEntry, rotation: &Rotation) -> String {
    format!(
        "{index:>3}  {key}  orbit={orbit}  count={count}  {tile}",
        key = entry.key,
        orbit = orbit_size(&entry.tile, rotation),
        count = entry.multiplicity,
        tile = entry.tile,
    )
}

/// One line per retained tile, in collection order
pub fn format_listing(collection: &TileCollection, rotation: &Rotation) -> Vec<String> {
    collection
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| format_entry(index, entry, rotation))
        .collect()
}
