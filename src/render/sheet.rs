//! Rasterization of a tile collection into a grid of cells
//!
//! Cells are filled row-major. Layout coordinates are mapped into each cell
//! with a small margin and the y axis pointing up. Strokes are clipped to
//! their own cell so neighbouring tiles never overlap.

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    BLANK, CELL_MARGIN_FRACTION, CURVE_SAMPLES, DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS,
    DEFAULT_STROKE_WIDTH, MAX_SHEET_DIMENSION, MIN_CELL_SIZE, SEA, SEAFOAM,
};
use crate::io::error::{Result, invalid_parameter};
use crate::matching::tile::Tile;
use crate::render::curve::edge_curve;
use crate::render::layout::{Extent, Layout};

/// Grid shape and stroke settings for a tile sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Cells per row
    pub columns: usize,
    /// Rows of cells
    pub rows: usize,
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Curve stroke width in pixels
    pub stroke_width: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl SheetConfig {
    /// Number of tiles the sheet can show
    pub const fn capacity(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Sheet size in pixels as `(width, height)`
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range or the sheet would
    /// exceed `MAX_SHEET_DIMENSION` on either axis
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        if self.cell_size < MIN_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be at least {MIN_CELL_SIZE} pixels"),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &"must be a positive number",
            ));
        }
        if self.stroke_width > f64::from(self.cell_size) {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &format!("must not exceed the cell size of {} pixels", self.cell_size),
            ));
        }
        let width = self.extent_pixels("columns", self.columns)?;
        let height = self.extent_pixels("rows", self.rows)?;
        Ok((width, height))
    }

    /// Validate all settings
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::dimensions`]
    pub fn validate(&self) -> Result<()> {
        self.dimensions().map(|_| ())
    }

    fn extent_pixels(&self, parameter: &'static str, cells: usize) -> Result<u32> {
        if cells == 0 {
            return Err(invalid_parameter(parameter, &cells, &"must be at least 1"));
        }
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(self.cell_size))
            .filter(|&pixels| pixels <= MAX_SHEET_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    parameter,
                    &cells,
                    &format!("sheet would exceed {MAX_SHEET_DIMENSION} pixels"),
                )
            })
    }
}

/// Pixel rectangle of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    x: u32,
    y: u32,
    size: u32,
}

impl Cell {
    /// Inclusive pixel bounds as `(left, top, right, bottom)`
    const fn bounds(&self) -> (i64, i64, i64, i64) {
        let left = self.x as i64;
        let top = self.y as i64;
        (
            left,
            top,
            left + self.size as i64 - 1,
            top + self.size as i64 - 1,
        )
    }
}

/// Image of a tile grid under construction
pub struct TileSheet {
    config: SheetConfig,
    layout: Layout,
    extent: Extent,
    image: RgbaImage,
}

impl TileSheet {
    /// Create a blank sheet
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation
    pub fn new(config: SheetConfig, layout: Layout) -> Result<Self> {
        let (width, height) = config.dimensions()?;
        let extent = layout.extent();
        Ok(Self {
            config,
            layout,
            extent,
            image: RgbaImage::from_pixel(width, height, Rgba(BLANK)),
        })
    }

    /// Render every tile that fits into a new sheet
    ///
    /// Tiles past the sheet capacity are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation or a tile references a
    /// point outside `layout`
    pub fn render<'a, I>(config: SheetConfig, layout: Layout, tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        Self::render_observed(config, layout, tiles, || ())
    }

    /// Same as [`Self::render`], calling `on_drawn` after each drawn cell
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::render`]
    pub fn render_observed<'a, I, F>(
        config: SheetConfig,
        layout: Layout,
        tiles: I,
        mut on_drawn: F,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Tile>,
        F: FnMut(),
    {
        let mut sheet = Self::new(config, layout)?;
        let mut skipped = 0usize;
        for (index, tile) in tiles.into_iter().enumerate() {
            if sheet.draw_tile(index, tile)? {
                on_drawn();
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::warn!(
                skipped,
                capacity = sheet.config.capacity(),
                "sheet is full; remaining tiles were not drawn"
            );
        }
        Ok(sheet)
    }

    /// Draw `tile` into cell `index`
    ///
    /// Returns `false` without drawing when `index` is past the last cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile references a point outside the layout
    pub fn draw_tile(&mut self, index: usize, tile: &Tile) -> Result<bool> {
        let Some(cell) = self.cell(index) else {
            return Ok(false);
        };

        self.fill_cell(cell, SEA);
        for &edge in tile.edges() {
            let curve = edge_curve(&self.layout, edge)?;
            let pixels: Vec<[f64; 2]> = curve
                .sample(CURVE_SAMPLES)
                .into_iter()
                .map(|point| self.to_pixel(cell, point))
                .collect();
            self.stroke_polyline(cell, &pixels, SEAFOAM);
        }
        Ok(true)
    }

    /// Configuration the sheet was built with
    pub const fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the sheet, keeping the image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        if index >= self.config.capacity() {
            return None;
        }
        let column = u32::try_from(index % self.config.columns).ok()?;
        let row = u32::try_from(index / self.config.columns).ok()?;
        Some(Cell {
            x: column * self.config.cell_size,
            y: row * self.config.cell_size,
            size: self.config.cell_size,
        })
    }

    fn fill_cell(&mut self, cell: Cell, color: [u8; 4]) {
        for py in cell.y..cell.y + cell.size {
            for px in cell.x..cell.x + cell.size {
                self.image.put_pixel(px, py, Rgba(color));
            }
        }
    }

    // Layout units to pixel coordinates inside `cell`, y flipped
    fn to_pixel(&self, cell: Cell, point: [f64; 2]) -> [f64; 2] {
        let margin = self.extent.span() * CELL_MARGIN_FRACTION;
        let span = 2.0f64.mul_add(margin, self.extent.span());
        let scale = if span > 0.0 {
            f64::from(cell.size) / span
        } else {
            0.0
        };
        let x = (point[0] - self.extent.min[0] + margin) * scale;
        let y = (point[1] - self.extent.min[1] + margin) * scale;
        [
            f64::from(cell.x) + x,
            f64::from(cell.y) + f64::from(cell.size) - y,
        ]
    }

    fn stroke_polyline(&mut self, cell: Cell, points: &[[f64; 2]], color: [u8; 4]) {
        let radius = (self.config.stroke_width / 2.0).max(0.5);
        for segment in points.windows(2) {
            let (Some(&from), Some(&to)) = (segment.first(), segment.last()) else {
                continue;
            };
            let length = (to[0] - from[0]).hypot(to[1] - from[1]);
            let steps = (length * 2.0).ceil().max(1.0) as usize;
            for step in 0..=steps {
                let t = step as f64 / steps as f64;
                let center = [
                    (to[0] - from[0]).mul_add(t, from[0]),
                    (to[1] - from[1]).mul_add(t, from[1]),
                ];
                self.stamp_disc(cell, center, radius, color);
            }
        }
    }

    fn stamp_disc(&mut self, cell: Cell, center: [f64; 2], radius: f64, color: [u8; 4]) {
        let (left, top, right, bottom) = cell.bounds();
        // Bounding box of the disc, clipped to the cell
        let min_x = ((center[0] - radius).floor() as i64).max(left);
        let max_x = ((center[0] + radius).ceil() as i64).min(right);
        let min_y = ((center[1] - radius).floor() as i64).max(top);
        let max_y = ((center[1] + radius).ceil() as i64).min(bottom);

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - center[0];
                let dy = py as f64 + 0.5 - center[1];
                if dx.mul_add(dx, dy * dy) <= radius * radius {
                    self.image.put_pixel(px as u32, py as u32, Rgba(color));
                }
            }
        }
    }
}
