//! Test data factories for exercism-submit types
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use exercism_submit::types::ExerciseMetadata;
use exercism_submit::workspace::{METADATA_DIR, METADATA_FILE, Workspace};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create metadata that passes validation for `track/slug`
pub fn make_metadata(track: &str, slug: &str, id: &str) -> ExerciseMetadata {
    ExerciseMetadata {
        track: track.to_string(),
        exercise: slug.to_string(),
        id: id.to_string(),
        team: String::new(),
        url: format!("https://exercism.org/tracks/{track}/exercises/{slug}"),
        handle: "alice".to_string(),
        is_requester: true,
        auto_approve: false,
        submitted_at: None,
    }
}

/// A temporary workspace on disk
pub struct TestWorkspace {
    dir: TempDir,
    workspace: Workspace,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path()).unwrap();
        Self { dir, workspace }
    }

    /// The opened workspace
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Workspace root as configured (not canonicalized)
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory of `track/slug`
    pub fn exercise_dir(&self, track: &str, slug: &str) -> PathBuf {
        self.dir.path().join(track).join(slug)
    }

    /// Create `track/slug` with `metadata` written to its metadata file
    pub fn add_exercise(&self, track: &str, slug: &str, metadata: &ExerciseMetadata) -> PathBuf {
        let dir = self.exercise_dir(track, slug);
        fs::create_dir_all(dir.join(METADATA_DIR)).unwrap();
        fs::write(
            dir.join(METADATA_DIR).join(METADATA_FILE),
            serde_json::to_string_pretty(metadata).unwrap(),
        )
        .unwrap();
        dir
    }

    /// Write a file inside `track/slug`, creating parent directories
    pub fn write_file(&self, track: &str, slug: &str, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.exercise_dir(track, slug).join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Turn paths into the string arguments a user would type
pub fn args(paths: &[&PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}
