//! Opt-in diagnostic output
//!
//! A [`Diagnostics`] implementation is chosen once at startup from the
//! `--verbose` and `--unmask-token` flags and passed down to whatever needs
//! to report. The default, [`NoopDiagnostics`], discards everything.

use reqwest::header::{AUTHORIZATION, HeaderMap};
use reqwest::{Request, StatusCode, Version};
use std::fmt::Write;

/// Sink for verbose diagnostic output
pub trait Diagnostics: Send + Sync {
    /// Report a free-form message
    fn message(&self, message: &str);

    /// Report an outgoing request
    ///
    /// `body` renders a streamed body that the request itself cannot show.
    fn dump_request(&self, request: &Request, body: Option<&str>);

    /// Report a received response
    fn dump_response(&self, response: &ResponseDump<'_>);
}

/// Borrowed view of a response whose body has already been read
#[derive(Debug)]
pub struct ResponseDump<'a> {
    /// HTTP version
    pub version: Version,
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: &'a HeaderMap,
    /// Response body
    pub body: &'a [u8],
}

/// Diagnostics that discard everything
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn message(&self, _message: &str) {}
    fn dump_request(&self, _request: &Request, _body: Option<&str>) {}
    fn dump_response(&self, _response: &ResponseDump<'_>) {}
}

/// Diagnostics written to stderr
pub struct StderrDiagnostics {
    /// Show the `Authorization` header value unredacted
    pub unmask_token: bool,
}

impl Diagnostics for StderrDiagnostics {
    fn message(&self, message: &str) {
        anstream::eprint!("{message}");
    }

    fn dump_request(&self, request: &Request, body: Option<&str>) {
        anstream::eprintln!(
            "\n========================= BEGIN DumpRequest =========================\n{}\n========================= END DumpRequest =========================\n",
            format_request(request, body, self.unmask_token)
        );
    }

    fn dump_response(&self, response: &ResponseDump<'_>) {
        anstream::eprintln!(
            "\n========================= BEGIN DumpResponse =========================\n{}\n========================= END DumpResponse =========================\n",
            format_response(response)
        );
    }
}

/// Mask all but the first 4 and last 3 characters of a secret
///
/// Secrets too short to keep both ends are masked entirely.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 7 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 7))
}

/// Redacted display form of a credential header value
///
/// `Bearer abcdef123456` keeps its scheme and redacts the credential; a value
/// without a scheme is redacted as a whole.
pub fn redact_header_value(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, credential)) => format!("{scheme} {}", redact(credential.trim())),
        None => redact(value),
    }
}

/// Render a request roughly as it appears on the wire
///
/// A body held in memory is printed as-is; a streamed body is replaced by
/// `streamed_body` when given.
pub fn format_request(request: &Request, streamed_body: Option<&str>, unmask_token: bool) -> String {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = format!("{} {target} {:?}\n", request.method(), request.version());
    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => {
                let _ = writeln!(out, "Host: {host}:{port}");
            }
            None => {
                let _ = writeln!(out, "Host: {host}");
            }
        }
    }

    for (name, value) in request.headers() {
        let value = value.to_str().unwrap_or("<non-ascii>");
        if name == AUTHORIZATION && !unmask_token {
            let _ = writeln!(out, "{name}: {}", redact_header_value(value));
        } else {
            let _ = writeln!(out, "{name}: {value}");
        }
    }
    out.push('\n');

    if let Some(body) = request.body() {
        match body.as_bytes() {
            Some(bytes) => out.push_str(&String::from_utf8_lossy(bytes)),
            None => out.push_str(streamed_body.unwrap_or("<streamed body not captured>")),
        }
    }
    out
}

/// Render a response roughly as it appears on the wire
pub fn format_response(response: &ResponseDump<'_>) -> String {
    let mut out = format!("{:?} {}\n", response.version, response.status);
    for (name, value) in response.headers {
        let _ = writeln!(out, "{name}: {}", value.to_str().unwrap_or("<non-ascii>"));
    }
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(response.body));
    out
}
