//! Submission pipeline
//!
//! Each stage takes the previous stage's output and either produces the next
//! record or aborts the whole submission:
//! 1. Resolve - normalize file arguments
//! 2. Match - find the single exercise the files belong to
//! 3. Validate - load and check the exercise metadata
//! 4. Collect - apply the size policy and build documents
//! 5. Upload - send the documents to the API
//! 6. Report - describe where to find the submitted solution

mod documents;
mod exercise;
mod metadata;
mod paths;
mod progress;
mod report;
mod upload;

pub use documents::{MAX_FILE_SIZE, collect_documents};
pub use exercise::match_exercise;
pub use metadata::{check_metadata, validate_metadata};
pub use paths::resolve_paths;
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use report::{SUBMITTED_HEADLINE, SubmissionReport, build_report};
pub use upload::{build_payload, upload_documents};

use crate::api::SolutionService;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::types::{Document, Exercise, ExerciseMetadata};
use crate::workspace::Workspace;

/// A validated submission, ready to upload
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    /// Exercise the files belong to
    pub exercise: Exercise,
    /// Metadata of the exercise's solution
    pub metadata: ExerciseMetadata,
    /// Files to upload, in argument order
    pub documents: Vec<Document>,
}

/// Run every local stage: resolve, match, validate and collect
pub fn prepare_submission<S: AsRef<str>>(
    args: &[S],
    workspace: &Workspace,
    progress: &dyn ProgressCallback,
    diagnostics: &dyn Diagnostics,
) -> Result<PreparedSubmission> {
    progress.on_phase(Phase::Resolving);
    let paths = resolve_paths(args)?;

    progress.on_phase(Phase::Validating);
    let exercise = match_exercise(workspace, &paths)?;
    let metadata = validate_metadata(&exercise, diagnostics)?;

    progress.on_phase(Phase::Collecting);
    let documents = collect_documents(&exercise, &paths, progress)?;

    Ok(PreparedSubmission {
        exercise,
        metadata,
        documents,
    })
}

/// Upload a prepared submission and describe the result
pub async fn submit_prepared(
    submission: &PreparedSubmission,
    service: &dyn SolutionService,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReport> {
    progress.on_phase(Phase::Uploading);
    upload_documents(service, &submission.metadata, &submission.documents).await?;

    progress.on_phase(Phase::Complete);
    Ok(build_report(&submission.metadata))
}

/// Run the whole pipeline for `args`
pub async fn submit_solution<S: AsRef<str>>(
    args: &[S],
    workspace: &Workspace,
    service: &dyn SolutionService,
    progress: &dyn ProgressCallback,
    diagnostics: &dyn Diagnostics,
) -> Result<SubmissionReport> {
    let submission = prepare_submission(args, workspace, progress, diagnostics)?;
    submit_prepared(&submission, service, progress).await
}
