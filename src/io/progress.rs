//! Batch progress display for frame rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Frames: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed and failed frames across worker threads
///
/// All reporting methods take `&self` so a single manager can be shared by
/// a parallel frame loop.
pub struct ProgressManager {
    bar: ProgressBar,
    failed: AtomicUsize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no frames queued
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            failed: AtomicUsize::new(0),
        }
    }

    /// Show a bar for the given number of frames
    pub fn initialize(&mut self, frame_count: usize) {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Record a finished frame
    pub fn complete_frame(&self, index: usize, elapsed: Duration) {
        self.bar
            .set_message(format!("frame {index} in {}ms", elapsed.as_millis()));
        self.bar.inc(1);
    }

    /// Record a frame that could not be produced
    pub fn fail_frame(&self, index: usize) {
        let failed = self.failed.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar
            .set_message(format!("frame {index} failed ({failed} so far)"));
        self.bar.inc(1);
    }

    /// Number of frames recorded as failed
    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Number of frames recorded so far, successful or not
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
