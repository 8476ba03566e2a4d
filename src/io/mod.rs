//! Command-line front end, configuration, errors and output

/// Command-line parsing and pipeline orchestration
pub mod cli;
/// Tiling constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export of rendered sheets
pub mod image;
/// Terminal progress display
pub mod progress;
/// Plain-text tile listing
pub mod report;
