//! Normalizing file arguments

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve file arguments to absolute, symlink-free paths of existing files
///
/// Output has one entry per argument, in the same order. Duplicates are kept.
pub fn resolve_paths<S: AsRef<str>>(args: &[S]) -> Result<Vec<PathBuf>> {
    if args.is_empty() {
        return Err(Error::InvalidState("no files given".to_string()));
    }

    args.iter().map(|arg| resolve_path(arg.as_ref())).collect()
}

fn resolve_path(arg: &str) -> Result<PathBuf> {
    let path = clean_path(&std::path::absolute(Path::new(arg))?);

    let info = fs::symlink_metadata(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound(path.clone()),
        _ => Error::Io(e),
    })?;
    if info.is_dir() {
        return Err(Error::UnsupportedTarget(path));
    }

    let resolved = fs::canonicalize(&path)?;
    // A symlink may still point at a directory.
    if resolved.is_dir() {
        return Err(Error::UnsupportedTarget(path));
    }

    debug!(arg, resolved = %resolved.display(), "resolved file argument");
    Ok(resolved)
}

/// Lexically drop `.` components and fold `..` into its parent
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
