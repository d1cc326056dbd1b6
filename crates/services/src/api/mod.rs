use async_trait::async_trait;

use study_core::model::{
    FeedbackInput, FeedbackResult, KnowledgeGraph, LessonContent, Plan, Profile, ProfileId,
    ProfileInput, ReviewPlan, UnitRequest,
};

use crate::error::ApiError;

mod config;
mod http;

pub use config::{ApiConfig, BASE_URL_VAR, DEFAULT_BASE_URL};
pub use http::HttpStudyApi;

/// Remote study service: profiling, planning, lessons, reviews and feedback.
#[async_trait]
pub trait StudyApi: Send + Sync {
    /// `POST /profile`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn create_profile(&self, input: &ProfileInput) -> Result<Profile, ApiError>;

    /// `POST /plan?topic=..[&profile_id=..]`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn create_plan(
        &self,
        topic: &str,
        profile_id: Option<ProfileId>,
    ) -> Result<Plan, ApiError>;

    /// `POST /lesson`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn fetch_lesson(&self, request: &UnitRequest) -> Result<LessonContent, ApiError>;

    /// `POST /review`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn fetch_review(&self, request: &UnitRequest) -> Result<ReviewPlan, ApiError>;

    /// `POST /feedback`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn submit_feedback(&self, input: &FeedbackInput) -> Result<FeedbackResult, ApiError>;

    /// `POST /knowledge-graph?topic=..`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RequestFailed` on any non-success outcome.
    async fn build_knowledge_graph(&self, topic: &str) -> Result<KnowledgeGraph, ApiError>;
}
