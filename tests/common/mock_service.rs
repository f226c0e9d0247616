//! Mock solution service for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use exercism_submit::api::{SolutionService, SubmissionPayload};
use exercism_submit::error::{Error, Result};
use std::sync::Mutex;

/// Call record for `submit_solution`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCall {
    pub solution_id: String,
    pub payload: SubmissionPayload,
}

/// Simple mock solution service
///
/// Features:
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockSolutionService {
    submit_calls: Mutex<Vec<SubmitCall>>,
    api_error: Mutex<Option<(String, String)>>,
}

impl MockSolutionService {
    /// Create a mock that accepts every submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `submit_solution` fail like a 400 response
    pub fn fail_with_api_error(&self, kind: &str, message: &str) {
        *self.api_error.lock().unwrap() = Some((kind.to_string(), message.to_string()));
    }

    /// Get all `submit_solution` calls
    pub fn get_submit_calls(&self) -> Vec<SubmitCall> {
        self.submit_calls.lock().unwrap().clone()
    }

    /// Filenames of the single recorded submission
    pub fn submitted_filenames(&self) -> Vec<String> {
        let calls = self.get_submit_calls();
        assert_eq!(calls.len(), 1, "expected exactly one submission: {calls:?}");
        calls[0]
            .payload
            .files
            .iter()
            .map(|f| f.filename.clone())
            .collect()
    }
}

#[async_trait]
impl SolutionService for MockSolutionService {
    async fn submit_solution(&self, solution_id: &str, payload: SubmissionPayload) -> Result<()> {
        self.submit_calls.lock().unwrap().push(SubmitCall {
            solution_id: solution_id.to_string(),
            payload,
        });

        if let Some((kind, message)) = self.api_error.lock().unwrap().clone() {
            return Err(Error::Api { kind, message });
        }
        Ok(())
    }
}
