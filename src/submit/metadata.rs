//! Loading and checking exercise metadata

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::types::{Exercise, ExerciseMetadata};
use tracing::debug;

/// Load the metadata for `exercise` and check it belongs to this user
///
/// Legacy metadata is migrated first; the migration outcome is only reported
/// to `diagnostics`.
pub fn validate_metadata(
    exercise: &Exercise,
    diagnostics: &dyn Diagnostics,
) -> Result<ExerciseMetadata> {
    let status = exercise.migrate_legacy_metadata()?;
    debug!(?status, "legacy metadata migration");
    diagnostics.message(&status.to_string());

    let metadata = ExerciseMetadata::load(&exercise.path())?;
    check_metadata(exercise, &metadata)?;
    Ok(metadata)
}

/// Check loaded metadata against the exercise it was found in
pub fn check_metadata(exercise: &Exercise, metadata: &ExerciseMetadata) -> Result<()> {
    if metadata.exercise != exercise.slug {
        return Err(Error::SlugMismatch {
            expected: exercise.slug.clone(),
            actual: metadata.exercise.clone(),
        });
    }

    if !metadata.is_requester {
        return Err(Error::UnlinkedSolution {
            exercise: metadata.exercise.clone(),
            track: metadata.track.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoopDiagnostics;
    use crate::types::MigrationStatus;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct RecordingDiagnostics(Mutex<Vec<String>>);

    impl Diagnostics for RecordingDiagnostics {
        fn message(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
        fn dump_request(&self, _request: &reqwest::Request, _body: Option<&str>) {}
        fn dump_response(&self, _response: &crate::diagnostics::ResponseDump<'_>) {}
    }

    fn exercise() -> Exercise {
        Exercise::from_dir(Path::new("/ws/rust/bob"))
    }

    fn metadata(slug: &str, is_requester: bool) -> ExerciseMetadata {
        ExerciseMetadata {
            track: "rust".to_string(),
            exercise: slug.to_string(),
            id: "abc123".to_string(),
            url: "https://exercism.org/tracks/rust/exercises/bob".to_string(),
            is_requester,
            ..ExerciseMetadata::default()
        }
    }

    #[test]
    fn test_matching_metadata() {
        check_metadata(&exercise(), &metadata("bob", true)).unwrap();
    }

    #[test]
    fn test_slug_mismatch() {
        let err = check_metadata(&exercise(), &metadata("alice", true)).unwrap_err();
        match err {
            Error::SlugMismatch { expected, actual } => {
                assert_eq!(expected, "bob");
                assert_eq!(actual, "alice");
            }
            other => panic!("expected SlugMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_slug_mismatch_checked_before_requester() {
        assert!(matches!(
            check_metadata(&exercise(), &metadata("alice", false)),
            Err(Error::SlugMismatch { .. })
        ));
    }

    #[test]
    fn test_not_requester() {
        assert!(matches!(
            check_metadata(&exercise(), &metadata("bob", false)),
            Err(Error::UnlinkedSolution { .. })
        ));
    }

    #[test]
    fn test_validate_migrates_legacy_metadata() {
        let tmp = TempDir::new().unwrap();
        let exercise = Exercise {
            root: tmp.path().to_path_buf(),
            track: "rust".to_string(),
            slug: "bob".to_string(),
        };
        fs::create_dir_all(exercise.path()).unwrap();
        fs::write(
            exercise.legacy_metadata_path(),
            serde_json::to_string(&metadata("bob", true)).unwrap(),
        )
        .unwrap();

        let diagnostics = RecordingDiagnostics(Mutex::new(Vec::new()));
        let loaded = validate_metadata(&exercise, &diagnostics).unwrap();

        assert_eq!(loaded.id, "abc123");
        assert!(exercise.has_metadata());
        assert!(!exercise.has_legacy_metadata());
        assert_eq!(
            diagnostics.0.lock().unwrap().as_slice(),
            [MigrationStatus::Migrated.to_string()]
        );
    }

    #[test]
    fn test_validate_without_metadata_file() {
        let tmp = TempDir::new().unwrap();
        let exercise = Exercise {
            root: tmp.path().to_path_buf(),
            track: "rust".to_string(),
            slug: "bob".to_string(),
        };
        fs::create_dir_all(exercise.path()).unwrap();

        assert!(matches!(
            validate_metadata(&exercise, &NoopDiagnostics),
            Err(Error::Io(_))
        ));
    }
}
