//! Error types for the `tutor-rag` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the tutor pipeline.
#[derive(Debug, Error)]
pub enum TutorError {
    /// The ingestion source directory does not exist.
    #[error("Source directory not found: {path}")]
    SourceNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// No usable documents or chunks were available to index.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// An external provider (embedding or generation) failed.
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// `answer()` was invoked before `ingest()` completed.
    #[error("Pipeline not ready: ingest() has not completed")]
    NotReady,

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for tutor pipeline operations.
pub type Result<T> = std::result::Result<T, TutorError>;
