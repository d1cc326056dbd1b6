use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use study_core::model::{
    FeedbackInput, FeedbackResult, KnowledgeGraph, LessonContent, Plan, Profile, ProfileId,
    ProfileInput, ReviewPlan, UnitRequest,
};

use super::{ApiConfig, StudyApi};
use crate::error::ApiError;

/// `StudyApi` over HTTP with JSON bodies.
#[derive(Clone)]
pub struct HttpStudyApi {
    client: Client,
    config: ApiConfig,
}

impl HttpStudyApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.config.endpoint(path))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(path, "study api request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(path, status = status.as_u16(), "study api request rejected");
            return Err(ApiError::RequestFailed {
                status: Some(status.as_u16()),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::RequestFailed {
                status: Some(status.as_u16()),
                message: format!("invalid response body: {err}"),
            })
    }
}

#[async_trait]
impl StudyApi for HttpStudyApi {
    async fn create_profile(&self, input: &ProfileInput) -> Result<Profile, ApiError> {
        self.send("/profile", self.post("/profile").json(input))
            .await
    }

    async fn create_plan(
        &self,
        topic: &str,
        profile_id: Option<ProfileId>,
    ) -> Result<Plan, ApiError> {
        let mut request = self.post("/plan").query(&[("topic", topic)]);
        if let Some(id) = profile_id {
            request = request.query(&[("profile_id", id.value())]);
        }
        self.send("/plan", request).await
    }

    async fn fetch_lesson(&self, request: &UnitRequest) -> Result<LessonContent, ApiError> {
        self.send("/lesson", self.post("/lesson").json(request))
            .await
    }

    async fn fetch_review(&self, request: &UnitRequest) -> Result<ReviewPlan, ApiError> {
        self.send("/review", self.post("/review").json(request))
            .await
    }

    async fn submit_feedback(&self, input: &FeedbackInput) -> Result<FeedbackResult, ApiError> {
        self.send("/feedback", self.post("/feedback").json(input))
            .await
    }

    async fn build_knowledge_graph(&self, topic: &str) -> Result<KnowledgeGraph, ApiError> {
        let request = self.post("/knowledge-graph").query(&[("topic", topic)]);
        self.send("/knowledge-graph", request).await
    }
}
