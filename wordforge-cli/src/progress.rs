//! Terminal progress bar fed by engine progress events.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use wordforge_core::Progress;

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, {eta})";

/// Renders progress on stderr, or nothing when hidden.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Creates a reporter for a run of `total` items.
    pub fn new(total: u128, hidden: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(u64::try_from(total).unwrap_or(u64::MAX)),
            if hidden {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            },
        );
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    /// Applies one progress event.
    pub fn update(&self, progress: Progress) {
        self.bar.set_position(progress.items_written);
    }

    /// Stops drawing and clears the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
