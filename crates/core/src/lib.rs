#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;

pub use error::InputError;
pub use progress::{CompletionOutcome, LearningSession, OpenLesson, ProgressError, SessionPhase};
