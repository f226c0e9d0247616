//! Describing a successful submission

use crate::types::ExerciseMetadata;

/// First line shown after every successful submission
pub const SUBMITTED_HEADLINE: &str = "Your solution has been submitted successfully.";

/// What to tell the user after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Status text (headline plus where to go next)
    pub status: String,
    /// Web URL of the solution
    pub url: String,
}

/// Build the success report for `metadata`
///
/// Personal solutions with auto-approval point at unlocking the next core
/// exercise; everything else points at viewing the solution.
pub fn build_report(metadata: &ExerciseMetadata) -> SubmissionReport {
    let next_step = if metadata.auto_approve && metadata.team.is_empty() {
        "You can complete the exercise and unlock the next core exercise at:"
    } else {
        "View it at:"
    };

    SubmissionReport {
        status: format!("{SUBMITTED_HEADLINE}\n{next_step}"),
        url: metadata.url.clone(),
    }
}
