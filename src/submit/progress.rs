//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or a test) observe the pipeline without the pipeline
//! knowing how output is rendered.

use std::fmt;
use std::path::Path;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving file arguments
    Resolving,
    /// Matching files to an exercise and checking its metadata
    Validating,
    /// Selecting the files to upload
    Collecting,
    /// Uploading to the API
    Uploading,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Resolving => "Resolving files",
            Self::Validating => "Validating exercise",
            Self::Collecting => "Collecting files",
            Self::Uploading => "Submitting",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    fn on_phase(&self, phase: Phase);

    /// Called when an empty file is left out of the submission
    fn on_skipped_file(&self, path: &Path);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_phase(&self, _phase: Phase) {}
    fn on_skipped_file(&self, _path: &Path) {}
}
