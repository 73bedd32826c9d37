// src/progress.rs
use tracing::{info, warn};

/// Lightweight progress reporting used by the batch driver.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of record blocks.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the block at `index` became a record.
    fn item_done(&mut self, _index: usize) {}

    /// Called when the block at `index` was skipped.
    fn item_failed(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards progress to `tracing`. Used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!(total, "extracting car blocks");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, _index: usize) {
        self.done += 1;
    }

    fn item_failed(&mut self, index: usize, reason: &str) {
        self.failed += 1;
        warn!(index, "skipped car block: {reason}");
    }

    fn finish(&mut self) {
        info!(total = self.total, done = self.done, failed = self.failed, "extraction finished");
    }
}
