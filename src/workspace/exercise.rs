//! Exercise directories and their metadata files

use crate::error::Result;
use crate::types::{Exercise, MigrationStatus};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory inside an exercise holding CLI-managed files
pub const METADATA_DIR: &str = ".exercism";

/// Metadata file name inside [`METADATA_DIR`]
pub const METADATA_FILE: &str = "metadata.json";

/// Metadata file name used by older CLI versions, at the exercise root
pub const LEGACY_METADATA_FILE: &str = ".solution.json";

impl Exercise {
    /// Build an exercise from its directory (`root/track/slug`)
    pub fn from_dir(dir: &Path) -> Self {
        let name = |p: Option<&Path>| {
            p.and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        let track_dir = dir.parent();

        Self {
            root: track_dir
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            track: name(track_dir),
            slug: name(Some(dir)),
        }
    }

    /// Absolute path of the exercise directory
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.track).join(&self.slug)
    }

    /// Location of the current metadata file
    pub fn metadata_path(&self) -> PathBuf {
        self.path().join(METADATA_DIR).join(METADATA_FILE)
    }

    /// Location of the legacy metadata file
    pub fn legacy_metadata_path(&self) -> PathBuf {
        self.path().join(LEGACY_METADATA_FILE)
    }

    /// Whether the current metadata file exists
    pub fn has_metadata(&self) -> bool {
        self.metadata_path().is_file()
    }

    /// Whether the legacy metadata file exists
    pub fn has_legacy_metadata(&self) -> bool {
        self.legacy_metadata_path().is_file()
    }

    /// Move legacy metadata into the current location
    ///
    /// If both files exist the current one wins and the legacy file is
    /// deleted.
    pub fn migrate_legacy_metadata(&self) -> Result<MigrationStatus> {
        if !self.has_legacy_metadata() {
            return Ok(MigrationStatus::Noop);
        }

        fs::create_dir_all(self.path().join(METADATA_DIR))?;

        if self.has_metadata() {
            fs::remove_file(self.legacy_metadata_path())?;
            return Ok(MigrationStatus::Removed);
        }

        fs::rename(self.legacy_metadata_path(), self.metadata_path())?;
        Ok(MigrationStatus::Migrated)
    }
}
