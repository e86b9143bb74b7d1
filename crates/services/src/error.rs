//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted while preparing or starting a practice quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("kanji range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },
    #[error("kanji range ends at {end} but the dataset has {len} entries")]
    RangeOutOfBounds { end: usize, len: usize },
    #[error("no questions could be generated for this range")]
    EmptyQuestionSequence,
}

/// Errors emitted by `SentenceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SentenceError {
    #[error("example sentences are not configured")]
    Disabled,
    #[error("sentence request failed with status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("sentence response contained no text")]
    EmptyResponse,
    #[error("sentence response was not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
