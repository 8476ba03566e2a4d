//! Terminal progress display for the tiling pipeline

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar reused across pipeline stages
///
/// Each stage resets the bar with its own label and length. A hidden
/// manager accepts the same calls and draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a visible progress manager
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Start a new stage of `length` steps
    pub fn start_stage(&self, label: &'static str, length: usize) {
        self.bar.reset();
        self.bar.set_prefix(label);
        self.bar.set_length(length as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Advance the current stage by one step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Mark the current stage complete with a short summary
    pub fn complete_stage(&self, summary: String) {
        if let Some(length) = self.bar.length() {
            self.bar.set_position(length);
        }
        self.bar.set_message(summary);
    }

    /// Steps completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
