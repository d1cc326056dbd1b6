use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{ApiError, ProgressService, StudyApi};
use storage::records::SessionRecords;
use storage::repository::Storage;
use study_core::model::{
    FeedbackInput, FeedbackResult, KnowledgeGraph, LessonContent, Plan, PlanId, Profile,
    ProfileDraft, ProfileId, ProfileInput, ReviewPlan, Unit, UnitId, UnitRequest,
};

use crate::context::{UiApp, build_app_context, use_ui_state_provider};
use crate::routes::Route;
use crate::views::{
    CoursesView, FeedbackView, HomeView, LessonView, PlanView, ProfileTestHandles, ProfileView,
};

/// Canned study service: three units, lesson text with markup.
pub struct FakeStudyApi;

#[async_trait]
impl StudyApi for FakeStudyApi {
    async fn create_profile(&self, _input: &ProfileInput) -> Result<Profile, ApiError> {
        Ok(Profile {
            id: ProfileId::new(1),
            summary: "**目标明确**".into(),
            strengths: vec!["自律".into()],
            weaknesses: Vec::new(),
            preferences: Vec::new(),
            risk_points: Vec::new(),
            created_at: None,
            updated_at: None,
            input: None,
        })
    }

    async fn create_plan(
        &self,
        topic: &str,
        profile_id: Option<ProfileId>,
    ) -> Result<Plan, ApiError> {
        Ok(Plan {
            id: PlanId::new(1),
            profile_id,
            topic: topic.to_owned(),
            summary: "循序渐进".into(),
            units: ["向量", "矩阵", "行列式"]
                .iter()
                .enumerate()
                .map(|(i, title)| Unit {
                    id: UnitId::new(format!("u{i}")),
                    title: (*title).to_owned(),
                    knowledge_points: Vec::new(),
                    estimated_time_minutes: 40,
                    order: u32::try_from(i).unwrap_or_default(),
                })
                .collect(),
            created_at: None,
            updated_at: None,
        })
    }

    async fn fetch_lesson(&self, request: &UnitRequest) -> Result<LessonContent, ApiError> {
        Ok(LessonContent {
            unit_id: request.unit_id.clone(),
            introduction: "### 问题引导\n什么是**向量**？".into(),
            explanation: "有方向的量".into(),
            examples: vec!["位移".into()],
            exercises: vec!["求和".into()],
        })
    }

    async fn fetch_review(&self, _request: &UnitRequest) -> Result<ReviewPlan, ApiError> {
        Ok(ReviewPlan {
            items: Vec::new(),
            combined_exercises: Vec::new(),
        })
    }

    async fn submit_feedback(&self, _input: &FeedbackInput) -> Result<FeedbackResult, ApiError> {
        Ok(FeedbackResult::default())
    }

    async fn build_knowledge_graph(&self, topic: &str) -> Result<KnowledgeGraph, ApiError> {
        Ok(KnowledgeGraph {
            topic: topic.to_owned(),
            nodes: Vec::new(),
        })
    }
}

/// Study service that rejects every request with HTTP 500.
pub struct FailingStudyApi;

fn server_error() -> ApiError {
    ApiError::RequestFailed {
        status: Some(500),
        message: "HTTP error! status: 500".into(),
    }
}

#[async_trait]
impl StudyApi for FailingStudyApi {
    async fn create_profile(&self, _input: &ProfileInput) -> Result<Profile, ApiError> {
        Err(server_error())
    }

    async fn create_plan(
        &self,
        _topic: &str,
        _profile_id: Option<ProfileId>,
    ) -> Result<Plan, ApiError> {
        Err(server_error())
    }

    async fn fetch_lesson(&self, _request: &UnitRequest) -> Result<LessonContent, ApiError> {
        Err(server_error())
    }

    async fn fetch_review(&self, _request: &UnitRequest) -> Result<ReviewPlan, ApiError> {
        Err(server_error())
    }

    async fn submit_feedback(&self, _input: &FeedbackInput) -> Result<FeedbackResult, ApiError> {
        Err(server_error())
    }

    async fn build_knowledge_graph(&self, _topic: &str) -> Result<KnowledgeGraph, ApiError> {
        Err(server_error())
    }
}

pub fn profile_draft() -> ProfileDraft {
    ProfileDraft {
        stage: "大三".into(),
        direction: "线性代数".into(),
        plan: "每周三次".into(),
        goal: "期末满分".into(),
        pace: "每天1小时".into(),
    }
}

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Profile,
    Plan,
    Courses,
    Lesson,
    Feedback,
    /// The application router with its layout, starting at `/`.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    profile_handles: ProfileTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.profile_handles.clone());
    if props.view == ViewKind::Shell {
        return rsx! { Router::<Route> {} };
    }
    use_ui_state_provider();
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::Plan => rsx! { PlanView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Lesson => rsx! { LessonView {} },
        ViewKind::Feedback => rsx! { FeedbackView {} },
        ViewKind::Shell => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub progress: Arc<ProgressService>,
    pub profile_handles: ProfileTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a view over fresh in-memory storage. Seed the session through
/// `progress` before calling [`ViewHarness::rebuild`].
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_api(view, Arc::new(FakeStudyApi))
}

pub fn setup_view_harness_with_api(view: ViewKind, api: Arc<dyn StudyApi>) -> ViewHarness {
    let storage = Storage::in_memory();
    let records = SessionRecords::new(Arc::clone(&storage.sessions));
    let progress = Arc::new(ProgressService::new(api, records));

    let app = Arc::new(TestApp {
        progress: Arc::clone(&progress),
    });
    let profile_handles = ProfileTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            profile_handles: profile_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        progress,
        profile_handles,
    }
}
