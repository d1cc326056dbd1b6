use thiserror::Error;

use crate::model::{FeedbackError, PlanTopicError, ProfileInputError};

/// Form input rejected before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error(transparent)]
    Profile(#[from] ProfileInputError),
    #[error(transparent)]
    Topic(#[from] PlanTopicError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}
