//! Progress display for rotation sweeps

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered sweep frames and how many of them had line of sight
pub struct SweepProgress {
    bar: ProgressBar,
    visible_frames: usize,
}

impl SweepProgress {
    /// Create a progress bar for `frames` sweep frames
    pub fn new(frames: usize) -> Self {
        let bar = ProgressBar::new(frames as u64);
        bar.set_style(SWEEP_STYLE.clone());
        bar.set_prefix("sweep");
        Self {
            bar,
            visible_frames: 0,
        }
    }

    /// Progress bar that never draws, for quiet runs and tests
    pub fn hidden(frames: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(frames as u64);
        Self {
            bar,
            visible_frames: 0,
        }
    }

    /// Record one rendered frame at `angle` degrees
    pub fn frame_done(&mut self, angle: f64, visible: bool) {
        if visible {
            self.visible_frames += 1;
        }
        self.bar.set_message(format!(
            "{angle:>6.1}° {}",
            if visible { "visible" } else { "blocked" }
        ));
        self.bar.inc(1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Frames that had line of sight
    pub const fn visible_frames(&self) -> usize {
        self.visible_frames
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} of {} frames visible",
            self.visible_frames,
            self.bar.position()
        ));
    }
}
