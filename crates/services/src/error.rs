//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use classroom_core::editor::EditorError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Coarse classification of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response arrived.
    Transport,
    /// The backend rejected the credential.
    Authorization,
    /// A response arrived but did not have the expected shape or status.
    UnexpectedShape,
    /// Local persistence failed.
    Storage,
}

/// Errors emitted by the remote API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Any 4xx on an authenticated call.
    #[error("request was rejected (status {0})")]
    Unauthorized(StatusCode),
    #[error("request failed with status {0}")]
    Status(StatusCode),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("entity not found")]
    NotFound,
    #[error(transparent)]
    Credentials(#[from] StorageError),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport(_) => FailureKind::Transport,
            ApiError::Unauthorized(_) => FailureKind::Authorization,
            ApiError::Status(_) | ApiError::Decode(_) | ApiError::NotFound => {
                FailureKind::UnexpectedShape
            }
            ApiError::Credentials(_) => FailureKind::Storage,
        }
    }

    /// Map a non-success status to the matching variant. Client errors are authorization
    /// failures; everything else is an unexpected status.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_client_error() {
            ApiError::Unauthorized(status)
        } else {
            ApiError::Status(status)
        }
    }
}

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("attachment could not be encoded: {0}")]
    Encode(String),
}

/// Errors emitted by form-backed writes (classrooms, quizzes, students, assignments).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteError {
    #[error("select a quiz to assign")]
    MissingQuiz,
    #[error("expiration date `{0}` is not a valid date and time")]
    InvalidExpiration(String),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `SessionGuard::login`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid API base url `{0}`")]
    InvalidBaseUrl(String),
}
