//! Core types for exercism-submit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// An exercise solution directory inside the workspace
///
/// Laid out on disk as `root/track/slug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Workspace root the track directory lives in
    pub root: PathBuf,
    /// Track slug (e.g., "rust")
    pub track: String,
    /// Exercise slug (e.g., "hello-world")
    pub slug: String,
}

/// Metadata persisted alongside a downloaded exercise
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExerciseMetadata {
    /// Track slug
    pub track: String,
    /// Exercise slug
    pub exercise: String,
    /// Server-assigned solution ID
    pub id: String,
    /// Team slug (empty for personal solutions)
    pub team: String,
    /// Web URL of the solution
    pub url: String,
    /// Handle of the user who downloaded the exercise
    pub handle: String,
    /// Whether the authenticated user created this solution
    pub is_requester: bool,
    /// Whether submissions to this solution are approved automatically
    pub auto_approve: bool,
    /// When the solution was last submitted, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A file queued for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the exercise directory, `/`-separated
    pub relative_path: String,
    /// Absolute filesystem path
    pub filepath: PathBuf,
    /// Size in bytes
    pub size: u64,
}

/// Outcome of moving a legacy metadata file into place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStatus {
    /// No legacy metadata present
    Noop,
    /// Legacy metadata renamed to the current location
    Migrated,
    /// Legacy metadata deleted because current metadata already existed
    Removed,
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => Ok(()),
            Self::Migrated => write!(f, "\nMigrated metadata\n"),
            Self::Removed => write!(f, "\nRemoved legacy metadata\n"),
        }
    }
}
