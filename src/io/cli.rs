//! Command-line interface for enumerating, deduplicating and drawing tiles

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_OUTPUT, DEFAULT_ROWS, DEFAULT_STROKE_WIDTH,
    POINT_COUNT,
};
use crate::io::error::Result;
use crate::io::image::export_sheet_as_png;
use crate::io::progress::ProgressManager;
use crate::io::report::format_listing;
use crate::matching::generator::enumerate_tiles;
use crate::render::{Layout, SheetConfig, TileSheet};
use crate::symmetry::{Canonicalizer, Retention, Rotation, TileCollection};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchtiles")]
#[command(
    author,
    version,
    about = "Draw every eight-point matching tile once per rotation class"
)]
/// Command-line arguments for the tile sheet tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path for the tile sheet
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Cells per sheet row
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Rows of cells
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Cell edge length in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Curve stroke width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Keep the first tile of each rotation class instead of the last
    #[arg(short = 'f', long)]
    pub keep_first: bool,

    /// Print the retained tiles to stdout
    #[arg(short, long)]
    pub list: bool,

    /// Skip writing the PNG sheet
    #[arg(short, long)]
    pub no_render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the sheet should be rendered and written
    pub const fn should_render(&self) -> bool {
        !self.no_render
    }

    /// Representative policy selected by flags
    pub const fn retention(&self) -> Retention {
        if self.keep_first {
            Retention::First
        } else {
            Retention::Last
        }
    }

    /// Sheet settings selected by flags
    pub const fn sheet_config(&self) -> SheetConfig {
        SheetConfig {
            columns: self.columns,
            rows: self.rows,
            cell_size: self.cell_size,
            stroke_width: self.stroke_width,
        }
    }
}

/// Runs the enumerate, deduplicate, list and render steps for one invocation
pub struct TileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl TileProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Execute the pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet settings are invalid or the PNG cannot
    /// be written
    pub fn process(&self) -> Result<TileCollection> {
        // Fail on bad geometry before doing any work
        if self.cli.should_render() {
            self.cli.sheet_config().validate()?;
        }

        let rotation = Rotation::quarter_turn();
        let collection = self.collect_tiles(rotation.clone());

        if self.cli.list {
            Self::print_listing(&collection, &rotation);
        }

        if self.cli.should_render() {
            self.render(&collection)?;
        }

        self.progress_manager.finish();
        Ok(collection)
    }

    fn collect_tiles(&self, rotation: Rotation) -> TileCollection {
        let tiles = enumerate_tiles(POINT_COUNT);
        let canonicalizer = Canonicalizer::new(rotation, self.cli.retention());

        self.progress_manager.start_stage("Classify", tiles.len());
        let collection =
            canonicalizer.deduplicate_observed(tiles, || self.progress_manager.advance());
        self.progress_manager
            .complete_stage(format!("{} rotation classes", collection.len()));

        tracing::info!(
            tiles = collection.inserted(),
            classes = collection.len(),
            "classified tiles"
        );
        collection
    }

    // Allow print for the requested tile listing
    #[allow(clippy::print_stdout)]
    fn print_listing(collection: &TileCollection, rotation: &Rotation) {
        for line in format_listing(collection, rotation) {
            println!("{line}");
        }
    }

    fn render(&self, collection: &TileCollection) -> Result<()> {
        let config = self.cli.sheet_config();
        self.progress_manager.start_stage("Render", collection.len().min(config.capacity()));
        let sheet = TileSheet::render_observed(
            config,
            Layout::square_ring(),
            collection.tiles(),
            || self.progress_manager.advance(),
        )?;
        let drawn = self.progress_manager.position();
        self.progress_manager.complete_stage(format!("{drawn} cells drawn"));

        export_sheet_as_png(sheet.image(), &self.cli.output)
    }
}
