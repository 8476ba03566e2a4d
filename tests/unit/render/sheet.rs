//! Tests for tile sheet configuration and rasterization

#[cfg(test)]
mod tests {
    use image::Rgba;
    use matchtiles::TilingError;
    use matchtiles::io::configuration::{BLANK, MAX_SHEET_DIMENSION, SEA, SEAFOAM};
    use matchtiles::matching::Tile;
    use matchtiles::matching::generator::enumerate_tiles;
    use matchtiles::render::{Layout, SheetConfig, TileSheet};

    fn small_config(columns: usize, rows: usize) -> SheetConfig {
        SheetConfig {
            columns,
            rows,
            cell_size: 32,
            stroke_width: 2.0,
        }
    }

    fn count_color(sheet: &TileSheet, x0: u32, y0: u32, size: u32, color: [u8; 4]) -> usize {
        let mut count = 0;
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                if sheet.image().get_pixel(x, y) == &Rgba(color) {
                    count += 1;
                }
            }
        }
        count
    }

    // Tests default configuration is a valid 6x6 grid
    // Verified by changing the default row count
    #[test]
    fn test_default_config() {
        let config = SheetConfig::default();
        assert_eq!(config.capacity(), 36);
        assert!(config.validate().is_ok());
        assert!(matches!(config.dimensions(), Ok((576, 576))));
    }

    // Tests invalid geometry is rejected with the offending parameter
    // Verified by accepting zero columns
    #[test]
    fn test_invalid_config() {
        let zero_columns = small_config(0, 2);
        assert!(matches!(
            zero_columns.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "columns",
                ..
            })
        ));

        let tiny_cells = SheetConfig {
            cell_size: 2,
            ..small_config(2, 2)
        };
        assert!(matches!(
            tiny_cells.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));

        let no_stroke = SheetConfig {
            stroke_width: 0.0,
            ..small_config(2, 2)
        };
        assert!(no_stroke.validate().is_err());

        let too_tall = small_config(1, usize::try_from(MAX_SHEET_DIMENSION / 32 + 1).unwrap());
        assert!(matches!(
            too_tall.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests drawn cells get the sea background and seafoam strokes while empty cells stay blank
    // Verified by skipping the cell fill
    #[test]
    fn test_draw_tile_colors_cell() {
        let Ok(mut sheet) = TileSheet::new(small_config(2, 1), Layout::square_ring()) else {
            unreachable!("small config is valid");
        };
        let tile = Tile::from(vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
        assert!(matches!(sheet.draw_tile(0, &tile), Ok(true)));

        assert!(count_color(&sheet, 0, 0, 32, SEA) > 0);
        assert!(count_color(&sheet, 0, 0, 32, SEAFOAM) > 0);
        assert_eq!(count_color(&sheet, 32, 0, 32, BLANK), 32 * 32);
    }

    // Tests indices past the grid are skipped
    // Verified by wrapping indices modulo capacity
    #[test]
    fn test_draw_past_capacity() {
        let Ok(mut sheet) = TileSheet::new(small_config(1, 1), Layout::square_ring()) else {
            unreachable!("small config is valid");
        };
        let tile = Tile::from(vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
        assert!(matches!(sheet.draw_tile(1, &tile), Ok(false)));
        assert_eq!(count_color(&sheet, 0, 0, 32, BLANK), 32 * 32);
    }

    // Tests strokes stay inside their own cell
    // Verified by removing the cell bounds check when stamping
    #[test]
    fn test_strokes_clipped_to_cell() {
        let config = SheetConfig {
            stroke_width: 12.0,
            ..small_config(3, 1)
        };
        let Ok(mut sheet) = TileSheet::new(config, Layout::square_ring()) else {
            unreachable!("config is valid");
        };
        let tile = Tile::from(vec![(0, 5), (1, 4), (2, 7), (3, 6)]);
        assert!(matches!(sheet.draw_tile(1, &tile), Ok(true)));

        assert_eq!(count_color(&sheet, 0, 0, 32, BLANK), 32 * 32);
        assert_eq!(count_color(&sheet, 64, 0, 32, BLANK), 32 * 32);
    }

    // Tests rendering a full collection fills cells row-major and reports bad labels
    // Verified by filling cells column-major
    #[test]
    fn test_render_row_major() {
        let tiles = enumerate_tiles(8);
        let Ok(sheet) = TileSheet::render(small_config(2, 2), Layout::square_ring(), &tiles)
        else {
            unreachable!("config is valid");
        };
        assert_eq!(sheet.image().dimensions(), (64, 64));
        for (x, y) in [(0, 0), (32, 0), (0, 32), (32, 32)] {
            assert!(count_color(&sheet, x, y, 32, SEA) > 0);
        }
        assert_eq!(sheet.config().capacity(), 4);

        let bad = [Tile::from(vec![(0, 9)])];
        let result = TileSheet::render(small_config(1, 1), Layout::square_ring(), &bad);
        assert!(matches!(result, Err(TilingError::InvalidPoint { .. })));
    }

    // Tests strokes wider than a cell are rejected before anything is drawn
    // Verified by accepting any finite positive stroke width
    #[test]
    fn test_oversized_stroke_rejected() {
        let huge = SheetConfig {
            columns: 1,
            rows: 1,
            cell_size: 8,
            stroke_width: 1e7,
        };
        assert!(matches!(
            huge.validate(),
            Err(TilingError::InvalidParameter {
                parameter: "stroke_width",
                ..
            })
        ));
        let tiles = [Tile::from(vec![(0, 1), (2, 3), (4, 5), (6, 7)])];
        assert!(TileSheet::render(huge, Layout::square_ring(), &tiles).is_err());
    }

    // Tests the widest accepted stroke floods only its own cell
    // Verified by looping over the unclipped disc bounds
    #[test]
    fn test_full_width_stroke_stays_in_cell() {
        let config = SheetConfig {
            stroke_width: 32.0,
            ..small_config(2, 1)
        };
        assert!(config.validate().is_ok());
        let tiles = [Tile::from(vec![(0, 5), (1, 4), (2, 7), (3, 6)])];
        let Ok(sheet) = TileSheet::render(config, Layout::square_ring(), &tiles) else {
            unreachable!("config is valid");
        };

        assert!(count_color(&sheet, 0, 0, 32, SEAFOAM) > 0);
        assert_eq!(count_color(&sheet, 32, 0, 32, BLANK), 32 * 32);
    }

    // Tests the draw callback runs once per drawn cell and not for skipped tiles
    // Verified by calling the callback for every input tile
    #[test]
    fn test_render_observed_counts_drawn_cells() {
        let tiles = enumerate_tiles(8);
        let mut drawn = 0;
        let result = TileSheet::render_observed(
            small_config(2, 3),
            Layout::square_ring(),
            &tiles,
            || drawn += 1,
        );

        assert!(result.is_ok());
        assert_eq!(drawn, 6);
    }
}

