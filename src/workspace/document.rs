//! Files queued for upload

use crate::error::{Error, Result};
use crate::types::Document;
use std::path::{Component, Path};

impl Document {
    /// Create a document for `filepath` labelled relative to `exercise_dir`
    ///
    /// `size` is the byte length the caller already checked; the file is not
    /// read again.
    pub fn new(exercise_dir: &Path, filepath: &Path, size: u64) -> Result<Self> {
        let relative = filepath.strip_prefix(exercise_dir).map_err(|_| {
            Error::InvalidState(format!(
                "{} is not inside {}",
                filepath.display(),
                exercise_dir.display()
            ))
        })?;

        let relative_path = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        Ok(Self {
            relative_path,
            filepath: filepath.to_path_buf(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("main.rs");
        fs::write(&file, "fn main() {}").unwrap();

        let doc = Document::new(tmp.path(), &file, 12).unwrap();
        assert_eq!(doc.relative_path, "src/bin/main.rs");
        assert_eq!(doc.filepath, file);
        assert_eq!(doc.size, 12);
    }

    #[test]
    fn test_file_outside_exercise() {
        let tmp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let file = other.path().join("x.rs");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            Document::new(tmp.path(), &file, 1),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_size_is_taken_from_caller() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("lib.rs");
        fs::write(&file, "grown after the check").unwrap();

        let doc = Document::new(tmp.path(), &file, 5).unwrap();
        assert_eq!(doc.size, 5);
    }
}
