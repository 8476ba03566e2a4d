//! Tiling constants and runtime configuration defaults

// Fixed geometry of the tile family
/// Number of labeled points on the tile boundary
pub const POINT_COUNT: usize = 8;

/// Label offset applied by one quarter-turn (two points per side)
pub const ROTATION_STEP: usize = 2;

/// Rotations examined when building a canonical key
pub const QUARTER_TURNS: usize = 4;

/// Boundary coordinates of each point label, two per side of a 3x3 square
pub const POINT_COORDINATES: [[f64; 2]; POINT_COUNT] = [
    [0.0, 1.0],
    [0.0, 2.0],
    [1.0, 3.0],
    [2.0, 3.0],
    [3.0, 2.0],
    [3.0, 1.0],
    [2.0, 0.0],
    [1.0, 0.0],
];

/// Offset added to the endpoint sum before averaging the curve control node
pub const CONTROL_PULL: f64 = 1.5;

// Sheet layout defaults
/// Default number of sheet columns
pub const DEFAULT_COLUMNS: usize = 6;
/// Default number of sheet rows
pub const DEFAULT_ROWS: usize = 6;
/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 96;
/// Smallest cell that still shows a readable tile
pub const MIN_CELL_SIZE: u32 = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum sheet width or height in pixels
pub const MAX_SHEET_DIMENSION: u32 = 16_384;

/// Default curve stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Points sampled along each edge curve
pub const CURVE_SAMPLES: usize = 64;
/// Fraction of the layout extent left blank around each tile
pub const CELL_MARGIN_FRACTION: f64 = 0.05;

// Colors
/// Background of occupied cells
pub const SEA: [u8; 4] = [0x3c, 0x99, 0x92, 0xff];
/// Edge curve color
pub const SEAFOAM: [u8; 4] = [0x80, 0xf9, 0xad, 0xff];
/// Background of unoccupied cells
pub const BLANK: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

// Output settings
/// Default output path for the rendered sheet
pub const DEFAULT_OUTPUT: &str = "tiles.png";
