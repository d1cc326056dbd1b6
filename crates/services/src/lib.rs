#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod progress;

pub use api::{ApiConfig, HttpStudyApi, StudyApi};
pub use app_services::AppServices;
pub use error::{ApiError, AppServicesError, ProgressServiceError};
pub use progress::ProgressService;
