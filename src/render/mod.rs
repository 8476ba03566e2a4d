//! Drawing tiles as curved strokes on a grid image
//!
//! This module contains:
//! - The fixed label to coordinate layout
//! - Bézier curves for individual edges
//! - The tile sheet rasterizer

/// Quadratic Bézier curves for edges
pub mod curve;
/// Point coordinates and their bounds
pub mod layout;
/// Grid rasterization of tile collections
pub mod sheet;

pub use layout::Layout;
pub use sheet::{SheetConfig, TileSheet};
