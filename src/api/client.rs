//! reqwest-backed Exercism API client

use crate::api::{FILES_FIELD, SolutionService, SubmissionPayload};
use crate::diagnostics::{Diagnostics, ResponseDump};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("exercism-submit/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the API with a 400 status
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
}

/// Authenticated client for the Exercism API
pub struct ExercismClient {
    client: Client,
    token: String,
    api_base_url: String,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ExercismClient {
    /// Create a new client
    ///
    /// `timeout` of `None` disables the request timeout.
    pub fn new(
        token: impl Into<String>,
        api_base_url: impl Into<String>,
        timeout: Option<Duration>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            token: token.into(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            diagnostics,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn build_form(payload: SubmissionPayload) -> Result<Form> {
    payload
        .files
        .into_iter()
        .try_fold(Form::new(), |form, file| {
            let part = Part::bytes(file.content)
                .file_name(file.filename)
                .mime_str("application/octet-stream")
                .map_err(|e| Error::Encoding(e.to_string()))?;
            Ok(form.part(FILES_FIELD, part))
        })
}

#[async_trait]
impl SolutionService for ExercismClient {
    async fn submit_solution(&self, solution_id: &str, payload: SubmissionPayload) -> Result<()> {
        let url = self.api_url(&format!(
            "/solutions/{}",
            urlencoding::encode(solution_id)
        ));
        let body_preview = payload.describe();
        let form = build_form(payload)?;

        let request = self
            .client
            .patch(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .multipart(form)
            .build()?;
        self.diagnostics
            .dump_request(&request, Some(&body_preview));

        let response = self.client.execute(request).await?;
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        self.diagnostics.dump_response(&ResponseDump {
            version,
            status,
            headers: &headers,
            body: &body,
        });
        debug!(%status, %url, "submission response");

        // Only 400 carries a structured error; every other status is accepted.
        if status == StatusCode::BAD_REQUEST {
            let parsed: ApiErrorResponse =
                serde_json::from_slice(&body).map_err(|e| Error::Protocol(e.to_string()))?;
            return Err(Error::Api {
                kind: parsed.error.kind,
                message: parsed.error.message,
            });
        }

        Ok(())
    }
}
