//! Matching files to a single exercise

use crate::error::{Error, Result};
use crate::types::Exercise;
use crate::workspace::Workspace;
use std::path::PathBuf;
use tracing::debug;

/// Find the one exercise all `paths` belong to
///
/// Every path must resolve to the same exercise directory; files from
/// different solutions are never submitted together.
pub fn match_exercise(workspace: &Workspace, paths: &[PathBuf]) -> Result<Exercise> {
    let mut exercise_dir: Option<PathBuf> = None;

    for path in paths {
        let dir = workspace.exercise_dir(path)?;
        match &exercise_dir {
            Some(seen) if *seen != dir => return Err(Error::MixedSolution),
            Some(_) => {}
            None => exercise_dir = Some(dir),
        }
    }

    let dir = exercise_dir.ok_or_else(|| Error::InvalidState("no files given".to_string()))?;
    let exercise = Exercise::from_dir(&dir);
    debug!(track = %exercise.track, slug = %exercise.slug, "matched exercise");
    Ok(exercise)
}
