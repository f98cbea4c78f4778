//! Import progress reporting.

/// Trait for receiving bulk import progress updates.
pub trait ImportProgress {
    /// Called after each input line is processed, including skipped and
    /// failed ones. `current` is the 1-based line number.
    fn on_line(&self, current: usize, total: usize);

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_line(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_line(&self, current: usize, total: usize) {
        if current.is_multiple_of(100) || current == total {
            log::info!("  [{}/{}] lines", current, total);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
