use crate::driver::PairReport;
use crate::fetcher::FetchError;

/// Receives progress events from a mirror run.
///
/// All methods default to no-ops so implementations subscribe only to what
/// they present. Must be shareable across the driver's worker pool.
pub trait ProgressReporter: Send + Sync {
    /// A conditional fetch of the index is starting.
    fn fetching(&self, _uri: &str) {}

    /// Package syncing for one pair is starting; `total` is the index size.
    fn begin_packages(&self, _total: usize) {}

    /// One package finished; `fetched` is false when it was already fresh.
    fn package_synced(&self, _file_name: &str, _fetched: bool) {}

    /// One package failed all filename candidates. Never fatal to the run.
    fn package_failed(&self, _file_name: &str, _error: &FetchError) {}

    /// One mirror pair finished.
    fn pair_finished(&self, _report: &PairReport) {}
}

/// Reporter that ignores every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {}
