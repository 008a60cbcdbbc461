use std::path::Path;

use futures::stream::{self, StreamExt};

use crate::feedback::Feedback;
use crate::fetcher::{FetchError, Fetcher};
use crate::index::{self, PackageIndex};
use crate::locator;
use crate::mirror::{MirrorError, MirrorPair};
use crate::progress::ProgressReporter;
use crate::update::{update_file, update_file_with};

/// Default number of concurrent package fetches per mirror pair.
pub const DEFAULT_JOBS: usize = 4;

/// Outcome of syncing one mirror pair.
#[derive(Debug, Clone)]
pub struct PairReport {
    /// Normalized source locator.
    pub source: String,
    /// Number of entries in the index.
    pub total: usize,
    /// Packages fetched and written.
    pub fetched: usize,
    /// Packages already fresh on disk.
    pub up_to_date: usize,
    /// Packages that failed every filename candidate.
    pub failed: usize,
    /// Per-package error events.
    pub feedback: Vec<Feedback>,
}

/// Drives the mirror run: per pair, validates the destination, syncs and
/// decodes the package index, then conditionally fetches every listed
/// package over a bounded worker pool.
///
/// The fetcher is injected at construction so tests can substitute an
/// in-memory double.
pub struct MirrorDriver<F> {
    fetcher: F,
    jobs: usize,
}

impl<F: Fetcher> MirrorDriver<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            jobs: DEFAULT_JOBS,
        }
    }

    /// Set the worker pool width. Clamped to at least one.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Sync every mirror pair in order.
    ///
    /// Validation and index failures halt the run; individual package
    /// failures are downgraded to report feedback and never abort the
    /// batch.
    pub async fn run(
        &self,
        pairs: &[MirrorPair],
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<PairReport>, MirrorError> {
        let mut reports = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let report = self.sync_pair(pair, progress).await?;
            progress.pair_finished(&report);
            reports.push(report);
        }
        Ok(reports)
    }

    async fn sync_pair(
        &self,
        pair: &MirrorPair,
        progress: &dyn ProgressReporter,
    ) -> Result<PairReport, MirrorError> {
        let gems_dir = pair.ensure_layout()?;
        let base = locator::normalize(&pair.from);

        let index = self.sync_index(&base, &pair.to, progress).await?;

        progress.begin_packages(index.len());

        let results: Vec<(String, Result<bool, FetchError>)> = stream::iter(index.entries())
            .map(|(_, info)| {
                let file_name = info.file_name.clone();
                let base = base.as_str();
                let gems_dir = gems_dir.as_path();
                async move {
                    let result = self.sync_package(base, gems_dir, &file_name).await;
                    match &result {
                        Ok(fetched) => progress.package_synced(&file_name, *fetched),
                        Err(error) => progress.package_failed(&file_name, error),
                    }
                    (file_name, result)
                }
            })
            .buffer_unordered(self.jobs)
            .collect()
            .await;

        let mut report = PairReport {
            source: base,
            total: index.len(),
            fetched: 0,
            up_to_date: 0,
            failed: 0,
            feedback: Vec::new(),
        };

        for (file_name, result) in results {
            match result {
                Ok(true) => report.fetched += 1,
                Ok(false) => report.up_to_date += 1,
                Err(error) => {
                    report.failed += 1;
                    report
                        .feedback
                        .push(Feedback::error(format!("{file_name}: {error}")));
                }
            }
        }

        Ok(report)
    }

    /// Conditionally fetch the compressed index and, when an update is
    /// taken, inflate it into the plain index file. Either way, decode the
    /// local plain index.
    async fn sync_index(
        &self,
        base: &str,
        dest_dir: &Path,
        progress: &dyn ProgressReporter,
    ) -> Result<PackageIndex, MirrorError> {
        let compressed_name = index::compressed_index_file_name();
        let index_uri = format!("{base}/{compressed_name}");
        let compressed_path = dest_dir.join(&compressed_name);
        let index_path = dest_dir.join(index::index_file_name());

        progress.fetching(&index_uri);

        update_file_with(&self.fetcher, &index_uri, &compressed_path, || {
            index::inflate_file(&compressed_path, &index_path)
        })
        .await
        .map_err(|cause| MirrorError::IndexFetch {
            source: index_uri,
            cause,
        })?;

        PackageIndex::load(&index_path).map_err(|e| MirrorError::IndexDecode {
            path: index_path,
            cause: e.to_string(),
        })
    }

    /// Try each filename candidate in order; the first success wins. On a
    /// candidate failure the next is tried, and the last error is returned
    /// when all candidates fail.
    async fn sync_package(
        &self,
        base: &str,
        gems_dir: &Path,
        file_name: &str,
    ) -> Result<bool, FetchError> {
        let mut last_error = None;

        for candidate in filename_candidates(file_name) {
            let source = format!("{base}/gems/{candidate}");
            let dest = gems_dir.join(&candidate);
            match update_file(&self.fetcher, &source, &dest).await {
                Ok(fetched) => return Ok(fetched),
                Err(error) => last_error = Some(error),
            }
        }

        Err(last_error
            .unwrap_or_else(|| FetchError::NotFound(format!("{base}/gems/{file_name}"))))
    }
}

/// Ordered filename candidates for a package: the index's name, then the
/// lowercased variant when it differs. Repository generations were
/// inconsistent in filename case, so the fallback keeps old mirrors usable.
pub fn filename_candidates(file_name: &str) -> Vec<String> {
    let mut candidates = vec![file_name.to_owned()];
    let lowered = file_name.to_lowercase();
    if lowered != file_name {
        candidates.push(lowered);
    }
    candidates
}
