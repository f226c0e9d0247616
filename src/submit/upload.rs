//! Packaging documents and sending them to the API

use crate::api::{FilePart, SolutionService, SubmissionPayload};
use crate::error::{Error, Result};
use crate::types::{Document, ExerciseMetadata};
use tracing::info;

/// Read every document into a payload, in order
///
/// Each file is opened only for the duration of its read.
pub async fn build_payload(documents: &[Document]) -> Result<SubmissionPayload> {
    let mut files = Vec::with_capacity(documents.len());
    for doc in documents {
        let content = tokio::fs::read(&doc.filepath).await?;
        files.push(FilePart {
            filename: doc.relative_path.clone(),
            content,
        });
    }
    Ok(SubmissionPayload { files })
}

/// Upload `documents` as a new iteration of the solution in `metadata`
pub async fn upload_documents(
    service: &dyn SolutionService,
    metadata: &ExerciseMetadata,
    documents: &[Document],
) -> Result<()> {
    if metadata.id.is_empty() {
        return Err(Error::InvalidState("id is empty".to_string()));
    }
    if documents.is_empty() {
        return Err(Error::InvalidState("documents is empty".to_string()));
    }

    let payload = build_payload(documents).await?;
    info!(
        solution = %metadata.id,
        files = payload.files.len(),
        "submitting solution"
    );
    service.submit_solution(&metadata.id, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingService {
        calls: Mutex<Vec<(String, SubmissionPayload)>>,
    }

    #[async_trait]
    impl SolutionService for RecordingService {
        async fn submit_solution(&self, solution_id: &str, payload: SubmissionPayload) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((solution_id.to_string(), payload));
            Ok(())
        }
    }

    fn metadata(id: &str) -> ExerciseMetadata {
        ExerciseMetadata {
            id: id.to_string(),
            ..ExerciseMetadata::default()
        }
    }

    fn document(dir: &TempDir, name: &str, content: &str) -> Document {
        let filepath = dir.path().join(name);
        fs::write(&filepath, content).unwrap();
        Document {
            relative_path: name.to_string(),
            filepath,
            size: content.len() as u64,
        }
    }

    #[tokio::test]
    async fn test_uploads_one_part_per_document() {
        let tmp = TempDir::new().unwrap();
        let docs = vec![
            document(&tmp, "a.txt", "hello"),
            document(&tmp, "b.txt", "world"),
        ];
        let service = RecordingService::default();

        upload_documents(&service, &metadata("abc123"), &docs)
            .await
            .unwrap();

        let calls = service.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (id, payload) = &calls[0];
        assert_eq!(id, "abc123");
        assert_eq!(
            payload.files,
            vec![
                FilePart {
                    filename: "a.txt".to_string(),
                    content: b"hello".to_vec(),
                },
                FilePart {
                    filename: "b.txt".to_string(),
                    content: b"world".to_vec(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_id_is_invalid_state() {
        let tmp = TempDir::new().unwrap();
        let docs = vec![document(&tmp, "a.txt", "hello")];
        let service = RecordingService::default();

        let err = upload_documents(&service, &metadata(""), &docs)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert!(service.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_documents_is_invalid_state() {
        let service = RecordingService::default();
        let err = upload_documents(&service, &metadata("abc123"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_io_error() {
        let doc = Document {
            relative_path: "gone.txt".to_string(),
            filepath: PathBuf::from("/definitely/not/here/gone.txt"),
            size: 4,
        };
        let service = RecordingService::default();

        let err = upload_documents(&service, &metadata("abc123"), &[doc])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(service.calls.lock().unwrap().is_empty());
    }
}
