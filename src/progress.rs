//! Progress reporting infrastructure
//!
//! To avoid corrupted terminal output, nothing should be written to stdout or
//! stderr while a report is being displayed. Please use logs for debug
//! messages.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of ongoing operations
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Report on an operation made of a known number of uniform steps
    pub fn add_steps(&self, what: impl Into<Cow<'static, str>>, num_steps: usize) -> ProgressTracker {
        self.add(what, num_steps as u64, "{percent:>2}% (~{eta} left)")
    }

    /// Report on a byte stream whose total length is learned later
    ///
    /// Call [`ProgressTracker::set_total`] once the length is known, e.g.
    /// after reading a Content-Length header.
    pub fn add_bytes(&self, what: impl Into<Cow<'static, str>>) -> ProgressTracker {
        self.add(
            what,
            0,
            "{decimal_bytes}/{decimal_total_bytes} ({decimal_bytes_per_sec})",
        )
    }

    /// Common progress bar setup
    fn add(
        &self,
        what: impl Into<Cow<'static, str>>,
        initial_work: u64,
        style_trailer: &str,
    ) -> ProgressTracker {
        let bar = ProgressBar::new(initial_work)
            .with_prefix(what.into())
            .with_style(
                ProgressStyle::with_template(&format!("{{prefix}} {{wide_bar}} {style_trailer}"))
                    .expect("all styles above should be valid indicatif styles"),
            );
        self.0.add(bar.clone());
        ProgressTracker {
            bar,
            report: self.0.clone(),
        }
    }
}

/// Mechanism to track progress of one operation
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific operation
    bar: ProgressBar,

    /// Underlying process report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Declare the total amount of work, for bars created with unknown length
    pub fn set_total(&self, total: u64) {
        self.bar.set_length(total);
    }

    /// Show that a certain amount of progress has been made
    pub fn make_progress(&self, progress: u64) {
        self.bar.inc(progress);
    }

    /// Hide the progress bar once the operation is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
        self.report.remove(&self.bar);
    }
}
