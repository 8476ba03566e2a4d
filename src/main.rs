//! CLI entry point for drawing rotation-distinct matching tiles

use clap::Parser;
use matchtiles::io::cli::{Cli, TileProcessor};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> matchtiles::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let processor = TileProcessor::new(cli);
    processor.process().map(|_| ())
}
