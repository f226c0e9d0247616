//! Local workspace layout
//!
//! The workspace is the directory all downloaded exercises live under, laid
//! out as `<workspace>/<track>/<exercise>`. Each exercise directory carries a
//! metadata file linking it to a solution on the server.

mod document;
mod exercise;
mod metadata;

pub use exercise::{LEGACY_METADATA_FILE, METADATA_DIR, METADATA_FILE};

use crate::error::{Error, Result};
use crate::types::Exercise;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The root directory containing all exercise directories
#[derive(Debug, Clone)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Open a workspace rooted at `dir`
    ///
    /// The directory must exist; symlinks are resolved so that lookups can
    /// compare against canonical file paths.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().canonicalize()?;
        Ok(Self { dir })
    }

    /// Canonical workspace root
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Find the exercise directory that owns `path`
    ///
    /// Walks upward from the file until a directory holding exercise metadata
    /// (current or legacy) is found. Reaching the workspace root first means
    /// the exercise was never linked to the account.
    pub fn exercise_dir(&self, path: &Path) -> Result<PathBuf> {
        if !path.starts_with(&self.dir) {
            return Err(Error::NotInWorkspace {
                path: path.to_path_buf(),
                workspace: self.dir.clone(),
            });
        }

        let mut current = path.parent();
        while let Some(dir) = current {
            if dir == self.dir {
                break;
            }
            let exercise = Exercise::from_dir(dir);
            if exercise.has_metadata() || exercise.has_legacy_metadata() {
                debug!(dir = %dir.display(), "found exercise directory");
                return Ok(dir.to_path_buf());
            }
            current = dir.parent();
        }

        Err(Error::MissingMetadata)
    }
}
