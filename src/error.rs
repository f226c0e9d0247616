//! Error types for exercism-submit

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving and submitting a solution
#[derive(Debug, Error)]
pub enum Error {
    /// A submitted path does not exist
    #[error(
        "\n\n    The file you are trying to submit cannot be found.\n\n        {}\n",
        .0.display()
    )]
    NotFound(PathBuf),

    /// A submitted path is a directory
    #[error(
        "\n\n    You are submitting a directory, which is not currently supported.\n\n        {}\n\n    Please change into the directory and provide the path to the file(s) you wish to submit\n\n        exercism submit FILENAME\n",
        .0.display()
    )]
    UnsupportedTarget(PathBuf),

    /// Files belong to more than one exercise directory
    #[error(
        "\n\n    You are submitting files belonging to different solutions.\n    Please submit the files for one solution at a time.\n"
    )]
    MixedSolution,

    /// No metadata was found between the file and the workspace root
    #[error(
        "\n\n    The exercise you are submitting doesn't have the necessary metadata.\n    Please see https://exercism.org/docs/using/solving-exercises/working-locally for instructions on how to fix it.\n"
    )]
    MissingMetadata,

    /// A submitted file lives outside the configured workspace
    #[error(
        "\n\n    The file you are submitting is not inside your Exercism workspace.\n\n        {}\n\n    Your workspace is configured as\n\n        {}\n",
        .path.display(),
        .workspace.display()
    )]
    NotInWorkspace {
        /// The offending file
        path: PathBuf,
        /// The configured workspace root
        workspace: PathBuf,
    },

    /// Directory name and metadata slug disagree
    #[error(
        "\n\n    The exercise directory does not match exercise slug in metadata:\n\n        expected '{expected}' but got '{actual}'\n\n    Please rename the directory '{expected}' to '{actual}' and try again.\n"
    )]
    SlugMismatch {
        /// Slug derived from the directory name
        expected: String,
        /// Slug recorded in the metadata
        actual: String,
    },

    /// Metadata was not created by the authenticated user
    #[error(
        "\n\n    The solution you are submitting is not connected to your account.\n    Please re-download the exercise to make sure it has the data it needs.\n\n        exercism download --exercise={exercise} --track={track}\n"
    )]
    UnlinkedSolution {
        /// Exercise slug from the metadata
        exercise: String,
        /// Track slug from the metadata
        track: String,
    },

    /// A file reached the upload size limit
    #[error(
        "\n\n    The submitted file '{}' is larger than the max allowed file size of {limit} bytes.\n    Please reduce the size of the file and try again.\n",
        .path.display()
    )]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Size limit in bytes
        limit: u64,
    },

    /// Every candidate file was skipped
    #[error("\n\n    No files found to submit.\n")]
    NoFilesToSubmit,

    /// Configuration is missing or invalid
    #[error("{0}")]
    Config(String),

    /// Metadata file could not be parsed
    #[error("invalid exercise metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Local filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("failed to parse error response - {0}")]
    Protocol(String),

    /// Multipart body could not be built
    #[error("failed to encode submission: {0}")]
    Encoding(String),

    /// The API rejected the submission; its message is shown as-is
    #[error("{message}")]
    Api {
        /// Error type reported by the API
        kind: String,
        /// Human-readable message reported by the API
        message: String,
    },

    /// Internal precondition violated
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for exercism-submit
pub type Result<T> = std::result::Result<T, Error>;
