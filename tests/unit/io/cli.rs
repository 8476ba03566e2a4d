//! Tests for command-line parsing and the tiling pipeline

#[cfg(test)]
mod tests {
    use clap::Parser;
    use matchtiles::TilingError;
    use matchtiles::io::cli::{Cli, TileProcessor};
    use matchtiles::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_OUTPUT, DEFAULT_ROWS,
    };
    use matchtiles::matching::Tile;
    use matchtiles::symmetry::Retention;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.columns, DEFAULT_COLUMNS);
        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert!(!cli.list);
        assert!(!cli.quiet);
        assert!(cli.should_render());
        assert!(cli.should_show_progress());
        assert_eq!(cli.retention(), Retention::Last);
    }

    // Tests CLI parsing with all long arguments
    // Verified by swapping the columns and rows fields
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "out/sheet.png",
            "--columns",
            "7",
            "--rows",
            "5",
            "--cell-size",
            "40",
            "--stroke-width",
            "3.5",
            "--keep-first",
            "--list",
            "--no-render",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.output, PathBuf::from("out/sheet.png"));
        let config = cli.sheet_config();
        assert_eq!(config.columns, 7);
        assert_eq!(config.rows, 5);
        assert_eq!(config.cell_size, 40);
        assert!((config.stroke_width - 3.5).abs() < f64::EPSILON);
        assert_eq!(cli.retention(), Retention::First);
        assert!(cli.list);
        assert!(!cli.should_render());
        assert!(!cli.should_show_progress());
        assert!(cli.verbose);
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-c", "3", "-r", "2", "-s", "16", "-f", "-l", "-n"]);

        assert_eq!(cli.columns, 3);
        assert_eq!(cli.rows, 2);
        assert_eq!(cli.cell_size, 16);
        assert!(cli.keep_first);
        assert!(cli.list);
        assert!(cli.no_render);
    }

    // Tests the pipeline writes a PNG sheet with the requested size
    // Verified by skipping the export step
    #[test]
    fn test_process_writes_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("tiles.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "--cell-size",
            "16",
            "--quiet",
        ]);

        let collection = TileProcessor::new(cli).process().unwrap();
        assert_eq!(collection.len(), 35);

        let sheet = image::open(&output).unwrap();
        assert_eq!(sheet.to_rgba8().dimensions(), (96, 96));
    }

    // Tests skipping render produces no file but still classifies tiles
    // Verified by ignoring the no-render flag
    #[test]
    fn test_process_without_render() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("skipped.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "--no-render",
            "--keep-first",
            "--quiet",
        ]);

        let collection = TileProcessor::new(cli).process().unwrap();
        assert!(!output.exists());
        assert_eq!(collection.retention(), Retention::First);
        assert_eq!(
            collection.get(1),
            Some(&Tile::from(vec![(0, 1), (2, 3), (4, 6), (5, 7)]))
        );
    }

    // Tests invalid geometry fails before any file is written
    // Verified by validating only after rendering
    #[test]
    fn test_process_rejects_bad_geometry() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("bad.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "--columns",
            "0",
            "--quiet",
        ]);

        let result = TileProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(TilingError::InvalidParameter {
                parameter: "columns",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests a sheet smaller than the class count still renders
    // Verified by returning an error when the sheet overflows
    #[test]
    fn test_process_small_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("small.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "-c",
            "2",
            "-r",
            "2",
            "-s",
            "16",
            "-q",
        ]);

        let collection = TileProcessor::new(cli).process().unwrap();
        assert_eq!(collection.len(), 35);
        let sheet = image::open(&output).unwrap();
        assert_eq!(sheet.to_rgba8().dimensions(), (32, 32));
    }

    // Tests a stroke wider than the cell is refused instead of stalling the render
    // Verified by dropping the stroke width upper bound
    #[test]
    fn test_process_rejects_oversized_stroke() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wide.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "-s",
            "8",
            "-w",
            "1e7",
            "-q",
        ]);

        let result = TileProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(TilingError::InvalidParameter {
                parameter: "stroke_width",
                ..
            })
        ));
        assert!(!output.exists());
    }
}
