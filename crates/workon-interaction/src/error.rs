//! Classifier adapter error type.

use std::time::Duration;
use thiserror::Error;
use workon_core::WorkonError;

/// Errors surfaced by the intent classifier adapter.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The completion service could not be reached or refused the request.
    #[error("classifier transport error: {message}")]
    Transport {
        /// HTTP status, when the request got that far
        status_code: Option<u16>,
        message: String,
        /// Whether retrying the same request may succeed
        is_retryable: bool,
        /// Server-suggested retry delay, when provided
        retry_after: Option<Duration>,
    },

    /// No usable credentials were found.
    #[error("classifier credentials missing: {0}")]
    Credentials(String),

    /// The transport answered with something that is not a completion.
    #[error("invalid classifier response: {0}")]
    InvalidResponse(String),
}

impl ClassifierError {
    /// Creates a transport error without a status code.
    pub fn transport(message: impl Into<String>, is_retryable: bool) -> Self {
        Self::Transport {
            status_code: None,
            message: message.into(),
            is_retryable,
            retry_after: None,
        }
    }

    /// Returns whether retrying the request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                is_retryable: true,
                ..
            }
        )
    }
}

impl From<ClassifierError> for WorkonError {
    fn from(err: ClassifierError) -> Self {
        WorkonError::transport(err.to_string())
    }
}
