pub mod driver;
pub mod feedback;
pub mod fetcher;
pub mod index;
pub mod locator;
pub mod mirror;
pub mod progress;
pub mod update;

pub use driver::{DEFAULT_JOBS, MirrorDriver, PairReport};
pub use feedback::Feedback;
pub use fetcher::{FetchError, Fetcher};
pub use index::{IndexError, PackageIndex, PackageInfo};
pub use mirror::{MirrorError, MirrorPair};
pub use progress::{NullReporter, ProgressReporter};
pub use update::{is_stale, modified_time, update_file, update_file_with};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
