//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress reporter for a scan in flight
///
/// The total line count is unknown until the scan ends, so this is a
/// spinner rather than a bar.
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner for an input file
    pub fn start(&mut self, input: &Path) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Scanning {}", input.display()));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(pb);
    }

    /// Note a part file hitting disk
    pub fn part_written(&self, part: u32, lines: usize) {
        if let Some(pb) = &self.spinner {
            pb.set_message(format!("Wrote part {} ({} lines)", part, lines));
        }
    }

    /// Finish progress reporting, clearing the spinner line
    pub fn finish(&self) {
        if let Some(pb) = &self.spinner {
            pb.finish_and_clear();
        }
    }
}
