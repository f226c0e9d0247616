//! Selecting the files that go into a submission

use crate::error::{Error, Result};
use crate::submit::ProgressCallback;
use crate::types::{Document, Exercise};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Files must be strictly smaller than this many bytes
pub const MAX_FILE_SIZE: u64 = 65535;

/// Turn resolved paths into documents, enforcing the size policy
///
/// A file at or over [`MAX_FILE_SIZE`] fails the whole batch. Empty files are
/// skipped and reported through `progress`. Kept files stay in input order.
pub fn collect_documents(
    exercise: &Exercise,
    paths: &[PathBuf],
    progress: &dyn ProgressCallback,
) -> Result<Vec<Document>> {
    let exercise_dir = exercise.path();
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        let size = fs::metadata(path)?.len();

        if size >= MAX_FILE_SIZE {
            return Err(Error::FileTooLarge {
                path: path.clone(),
                limit: MAX_FILE_SIZE,
            });
        }
        if size == 0 {
            debug!(path = %path.display(), "skipping empty file");
            progress.on_skipped_file(path);
            continue;
        }

        documents.push(Document::new(&exercise_dir, path, size)?);
    }

    if documents.is_empty() {
        return Err(Error::NoFilesToSubmit);
    }

    debug!(count = documents.len(), "collected documents");
    Ok(documents)
}
