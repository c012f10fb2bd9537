//! Error types shared across the quiz engine.

use std::io;

use thiserror::Error;

/// Failure to obtain a question set. Every variant is a flavour of
/// "source unavailable": the session cannot start and the user may retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question count must be at least 1")]
    InvalidCount,
    #[error("question provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("question provider responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question provider reported code {code}: {reason}")]
    Provider { code: u8, reason: &'static str },
    #[error("malformed question payload: {0}")]
    Malformed(String),
    #[error("failed to read questions from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed(detail.into())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Misuse of the session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
    #[error("a question set is already loading")]
    LoadInFlight,
}

/// Error type for running the quiz application.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Source(#[from] SourceError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_messages() {
        let err = SourceError::Provider {
            code: 1,
            reason: "not enough questions",
        };
        assert_eq!(
            err.to_string(),
            "question provider reported code 1: not enough questions"
        );

        let err = SourceError::malformed("missing `results`");
        assert_eq!(err.to_string(), "malformed question payload: missing `results`");
    }

    #[test]
    fn test_quiz_error_wraps_source() {
        let err: QuizError = SourceError::InvalidCount.into();
        assert!(matches!(err, QuizError::Source(SourceError::InvalidCount)));
        assert!(err.to_string().starts_with("failed to load questions"));
    }
}
