//! Exercism API access
//!
//! [`SolutionService`] is the seam between the submission pipeline and the
//! network, so the pipeline can run against [`ExercismClient`] or a test
//! double.

mod client;

pub use client::{DEFAULT_TIMEOUT_SECS, ExercismClient};

use crate::error::Result;
use async_trait::async_trait;

/// Multipart field name every uploaded file is sent under
pub const FILES_FIELD: &str = "files[]";

/// A single file in a submission body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Name the server stores the file under (exercise-relative path)
    pub filename: String,
    /// Raw file contents
    pub content: Vec<u8>,
}

/// Files making up one submission, in upload order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    /// One part per document
    pub files: Vec<FilePart>,
}

impl SubmissionPayload {
    /// Human-readable rendering of the multipart parts, for request dumps
    pub fn describe(&self) -> String {
        self.files
            .iter()
            .map(|file| {
                format!(
                    "{FILES_FIELD}; filename=\"{}\" ({} bytes)\n{}\n",
                    file.filename,
                    file.content.len(),
                    String::from_utf8_lossy(&file.content)
                )
            })
            .collect()
    }
}

/// Remote operations on solutions
#[async_trait]
pub trait SolutionService: Send + Sync {
    /// Upload `payload` as a new iteration of the solution `solution_id`
    async fn submit_solution(&self, solution_id: &str, payload: SubmissionPayload) -> Result<()>;
}
