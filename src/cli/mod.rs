//! CLI commands
//!
//! Command implementations for the `exercism` binary.

mod progress;
pub mod style;
mod submit;

pub use submit::run_submit;

/// Flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Dump HTTP traffic to stderr
    pub verbose: bool,
    /// Do not redact the API token in dumps
    pub unmask_token: bool,
    /// HTTP timeout override in seconds
    pub timeout: Option<u64>,
}
