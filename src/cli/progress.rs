//! CLI progress callback with styled output and a spinner

use crate::cli::style::{Stylize, spinner_style};
use anstream::eprintln;
use exercism_submit::submit::{Phase, ProgressCallback};
use indicatif::ProgressBar;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Progress callback that writes to stderr
///
/// Verbose mode announces every phase; otherwise only the upload shows a
/// spinner so request dumps and spinner frames never interleave.
pub struct CliProgress {
    verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress reporter
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(bar) = spinner.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_phase(&self, phase: Phase) {
        if self.verbose {
            eprintln!("{}...", phase.to_string().muted().for_stderr());
            return;
        }

        match phase {
            Phase::Uploading => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(spinner_style());
                bar.set_message(format!("{phase}..."));
                bar.enable_steady_tick(Duration::from_millis(80));
                if let Ok(mut spinner) = self.spinner.lock() {
                    *spinner = Some(bar);
                }
            }
            Phase::Complete => self.clear_spinner(),
            _ => {}
        }
    }

    fn on_skipped_file(&self, path: &Path) {
        eprintln!(
            "{} Skipping empty file\n    {}",
            "warning:".warn(),
            path.display().to_string().accent().for_stderr()
        );
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}
