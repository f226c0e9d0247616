//! Submit command - upload files as a new iteration of a solution

use crate::cli::GlobalOptions;
use crate::cli::progress::CliProgress;
use crate::cli::style::{Stream, Stylize, check, hyperlink_url};
use anstream::{eprintln, println};
use exercism_submit::api::{DEFAULT_TIMEOUT_SECS, ExercismClient};
use exercism_submit::config::UserConfig;
use exercism_submit::diagnostics::{Diagnostics, NoopDiagnostics, StderrDiagnostics};
use exercism_submit::error::{Error, Result};
use exercism_submit::submit::{SUBMITTED_HEADLINE, prepare_submission, submit_prepared};
use exercism_submit::workspace::Workspace;
use std::sync::Arc;
use std::time::Duration;

fn request_timeout(option: Option<u64>) -> Option<Duration> {
    match option {
        None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
    }
}

/// Run the submit command
pub async fn run_submit(files: &[String], options: &GlobalOptions) -> Result<()> {
    let settings = UserConfig::load()?.submit_settings()?;

    let diagnostics: Arc<dyn Diagnostics> = if options.verbose {
        Arc::new(StderrDiagnostics {
            unmask_token: options.unmask_token,
        })
    } else {
        Arc::new(NoopDiagnostics)
    };

    let workspace = Workspace::new(&settings.workspace).map_err(|e| {
        Error::Config(format!(
            "cannot open workspace {}: {e}",
            settings.workspace.display()
        ))
    })?;

    let progress = CliProgress::new(options.verbose);
    let submission = prepare_submission(files, &workspace, &progress, diagnostics.as_ref())?;

    let client = ExercismClient::new(
        settings.token,
        settings.api_base_url,
        request_timeout(options.timeout),
        Arc::clone(&diagnostics),
    )?;
    let report = submit_prepared(&submission, &client, &progress).await?;

    let next_step = report
        .status
        .strip_prefix(SUBMITTED_HEADLINE)
        .unwrap_or(&report.status)
        .trim();
    eprintln!();
    eprintln!("    {} {}", check().for_stderr(), SUBMITTED_HEADLINE.emphasis().for_stderr());
    eprintln!("    {next_step}");
    eprintln!();
    println!("    {}", hyperlink_url(Stream::Stdout, &report.url));
    println!();

    Ok(())
}
