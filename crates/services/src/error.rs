//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use study_core::{InputError, ProgressError};

/// Errors emitted by the study API client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx status, transport failure, or an undecodable success body.
    ///
    /// `status` is `None` when no response was received.
    #[error("{message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
    #[error("invalid API base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
            ApiError::InvalidBaseUrl { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("create a learner profile first")]
    NoProfile,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
