//! Terminal progress display while a replay is rendered

use crate::io::configuration::PROGRESS_LABEL_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the moves of one replay
pub struct ReplayProgress {
    bar: ProgressBar,
}

impl ReplayProgress {
    /// Create a bar for `total_moves` steps, labelled with the strategy name
    pub fn new(total_moves: usize, label: &str) -> Self {
        let bar = ProgressBar::new(total_moves as u64);
        bar.set_style(STEP_STYLE.clone());
        bar.set_prefix(format!("{label:<PROGRESS_LABEL_WIDTH$}"));
        Self { bar }
    }

    /// Report the running count of completed steps
    pub fn update(&self, completed: usize) {
        self.bar.set_position(completed as u64);
    }

    /// Number of steps reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a summary message
    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}
