//! exercism-submit - submit exercise solutions to Exercism
//!
//! Resolves local files to a single exercise solution, validates the
//! solution's metadata and uploads the files to the Exercism API.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod submit;
pub mod types;
pub mod workspace;
