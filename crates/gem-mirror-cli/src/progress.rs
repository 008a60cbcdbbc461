//! Cargo-style progress output for mirror runs:
//!
//! ```text
//!     Fetching http://gems.example.com/Marshal.4.8.Z
//!     Mirroring [===========>             ] 500/952
//!      Mirrored 950 gems (2 failed, 430 up to date)
//! ```

use std::io::Write as _;
use std::sync::Mutex;

use gem_mirror::{FetchError, PairReport, ProgressReporter};

/// Print a cargo-style status line (verb right-aligned to 12 chars).
fn print_status(status: &str, message: &str) {
    let mut term = console::Term::stderr();
    let style = console::Style::new().green().bold();
    let _ = writeln!(term, "{:>12} {}", style.apply_to(status), message);
}

/// Terminal progress reporter: status lines per significant action plus a
/// progress bar keyed by total package count.
pub struct ConsoleProgress {
    bar: Mutex<Option<indicatif::ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn fetching(&self, uri: &str) {
        print_status("Fetching", uri);
    }

    fn begin_packages(&self, total: usize) {
        let pb = indicatif::ProgressBar::new(total as u64);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} {msg:>12} [{bar:25.cyan/dim}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("=> "),
        );
        pb.set_message("Mirroring");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn package_synced(&self, _file_name: &str, _fetched: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.inc(1);
        }
    }

    fn package_failed(&self, file_name: &str, error: &FetchError) {
        let guard = self.bar.lock().unwrap();
        let line = format!("error: {file_name}: {error}");
        match guard.as_ref() {
            Some(pb) => {
                pb.println(&line);
                pb.inc(1);
            }
            None => eprintln!("{line}"),
        }
    }

    fn pair_finished(&self, report: &PairReport) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }

        let mut summary = format!("{} gems from {}", report.total, report.source);
        if report.failed > 0 || report.up_to_date > 0 {
            summary.push_str(&format!(
                " ({} failed, {} up to date)",
                report.failed, report.up_to_date
            ));
        }
        print_status("Mirrored", &summary);
    }
}
