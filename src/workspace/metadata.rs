//! Reading persisted exercise metadata

use crate::error::Result;
use crate::types::ExerciseMetadata;
use crate::workspace::{METADATA_DIR, METADATA_FILE};
use std::fs;
use std::path::Path;

impl ExerciseMetadata {
    /// Load metadata from an exercise directory
    pub fn load(exercise_dir: &Path) -> Result<Self> {
        let path = exercise_dir.join(METADATA_DIR).join(METADATA_FILE);
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse metadata from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
