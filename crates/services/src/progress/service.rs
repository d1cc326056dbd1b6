use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storage::records::SessionRecords;
use study_core::model::{
    FeedbackDraft, FeedbackResult, KnowledgeGraph, Plan, Profile, ProfileDraft, ReviewPlan,
    UnitRequest, validate_topic,
};
use study_core::{CompletionOutcome, InputError, LearningSession, OpenLesson, ProgressError};
use tracing::debug;

use crate::api::StudyApi;
use crate::error::ProgressServiceError;

/// Drives a learner through profile, plan and lessons.
///
/// Every operation validates against the in-memory [`LearningSession`], talks to
/// the API, persists, and only then commits the new state. The session lock is
/// never held across an await point.
pub struct ProgressService {
    api: Arc<dyn StudyApi>,
    records: SessionRecords,
    session: Mutex<LearningSession>,
}

impl ProgressService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>, records: SessionRecords) -> Self {
        Self {
            api,
            records,
            session: Mutex::new(LearningSession::new()),
        }
    }

    fn session(&self) -> MutexGuard<'_, LearningSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> LearningSession {
        self.session().clone()
    }

    /// Rehydrate the session from storage.
    ///
    /// Returns whether both a profile and a plan were found.
    pub async fn resume(&self) -> bool {
        let profile = self.records.load_profile().await;
        let plan = self.records.load_plan().await;
        let progress = self.records.load_progress().await;
        let completed = self.records.load_completed().await;

        let restored = LearningSession::restore(profile, plan, progress, completed);
        let saved = restored.has_saved_session();
        debug!(phase = ?restored.phase(), frontier = restored.frontier(), "session restored");
        *self.session() = restored;
        saved
    }

    /// Submit the profile form; the stored profile is replaced on success.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank fields, `Api` when the request fails and
    /// `Storage` when the profile cannot be saved. Nothing changes on error.
    pub async fn create_profile(
        &self,
        draft: ProfileDraft,
    ) -> Result<Profile, ProgressServiceError> {
        let input = draft.validate().map_err(InputError::from)?;
        let profile = self.api.create_profile(&input).await?.with_input(input);

        self.records.save_profile(&profile).await?;
        self.session().replace_profile(profile.clone());
        debug!(profile_id = %profile.id, "profile created");
        Ok(profile)
    }

    /// Generate a plan for `topic`, starting progress over.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank topic, `Api` when the request fails and
    /// `Storage` when the plan cannot be saved. Nothing changes on error.
    pub async fn create_plan(&self, topic: &str) -> Result<Plan, ProgressServiceError> {
        let topic = validate_topic(topic).map_err(InputError::from)?;
        let profile_id = self.session().profile_id();
        let plan = self.api.create_plan(&topic, profile_id).await?;

        self.records.save_new_plan(&plan).await?;
        self.session().replace_plan(plan.clone());
        debug!(plan_id = %plan.id, units = plan.units.len(), "plan created");
        Ok(plan)
    }

    /// Fetch the lesson at `index` and make it the open lesson.
    ///
    /// # Errors
    ///
    /// Returns `Progress` when the unit is locked, out of range or there is no
    /// plan (the API is not called), `Api` when the fetch fails, and
    /// `Progress(PlanChanged)` when a new plan replaced the old one mid-fetch.
    pub async fn open_unit(&self, index: usize) -> Result<OpenLesson, ProgressServiceError> {
        let request = {
            let session = self.session();
            let plan = session.plan().ok_or(ProgressError::NoPlan)?;
            let unit = session.openable_unit(index)?;
            UnitRequest {
                plan_id: plan.id,
                unit_id: unit.id.clone(),
            }
        };

        let content = self.api.fetch_lesson(&request).await?;

        let mut session = self.session();
        if session.plan().map(|plan| plan.id) != Some(request.plan_id) {
            return Err(ProgressError::PlanChanged { index }.into());
        }
        let open = session.open(index, content)?.clone();
        debug!(index, unit_id = %open.unit.id, "lesson opened");
        Ok(open)
    }

    /// Mark the open lesson complete and persist the new progress.
    ///
    /// # Errors
    ///
    /// Returns `Progress(NotOpen)` when `index` is not the open lesson and
    /// `Storage` when progress cannot be saved. A failed save leaves the
    /// in-memory progress ahead of storage until the next successful save.
    pub async fn complete_unit(
        &self,
        index: usize,
    ) -> Result<CompletionOutcome, ProgressServiceError> {
        let (outcome, progress, completed) = {
            let mut session = self.session();
            let outcome = session.complete(index)?;
            (outcome, session.progress(), session.completed().clone())
        };

        self.records
            .save_progress_and_completed(progress, &completed)
            .await?;
        debug!(
            index,
            frontier = outcome.frontier,
            advanced = outcome.frontier_advanced,
            "lesson completed"
        );
        Ok(outcome)
    }

    /// Fetch review suggestions for the unit at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Progress` without a plan or for an out-of-range index, and `Api`
    /// when the request fails.
    pub async fn fetch_review(&self, index: usize) -> Result<ReviewPlan, ProgressServiceError> {
        let request = {
            let session = self.session();
            let plan = session.plan().ok_or(ProgressError::NoPlan)?;
            let unit = plan.unit(index).ok_or(ProgressError::UnitOutOfRange {
                index,
                len: plan.units.len(),
            })?;
            UnitRequest {
                plan_id: plan.id,
                unit_id: unit.id.clone(),
            }
        };

        Ok(self.api.fetch_review(&request).await?)
    }

    /// Send feedback about the current plan and open lesson.
    ///
    /// # Errors
    ///
    /// Returns `NoProfile` without a profile, `InvalidInput` for ratings outside
    /// 1..=5, `Api` when the request fails and `Storage` when an updated
    /// profile cannot be saved.
    pub async fn submit_feedback(
        &self,
        draft: FeedbackDraft,
    ) -> Result<FeedbackResult, ProgressServiceError> {
        let (profile, input) = {
            let session = self.session();
            let profile = session
                .profile()
                .cloned()
                .ok_or(ProgressServiceError::NoProfile)?;
            let plan_id = session.plan().map(|plan| plan.id);
            let unit_id = session.open_lesson().map(|open| open.unit.id.clone());
            let input = draft
                .validate(profile.id, plan_id, unit_id)
                .map_err(InputError::from)?;
            (profile, input)
        };

        let result = self.api.submit_feedback(&input).await?;

        if let Some(updated) = &result.profile_updates {
            let mut updated = updated.clone();
            if updated.input.is_none() {
                updated.input = profile.input;
            }
            self.records.save_profile(&updated).await?;
            self.session().replace_profile(updated);
            debug!(profile_id = %profile.id, "profile updated from feedback");
        }
        Ok(result)
    }

    /// Preview the knowledge points the server derives for `topic`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank topic and `Api` when the request fails.
    pub async fn knowledge_graph(&self, topic: &str) -> Result<KnowledgeGraph, ProgressServiceError> {
        let topic = validate_topic(topic).map_err(InputError::from)?;
        Ok(self.api.build_knowledge_graph(&topic).await?)
    }

    /// Forget the profile, plan and progress.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the records cannot be removed; the in-memory session
    /// is left untouched in that case.
    pub async fn reset(&self) -> Result<(), ProgressServiceError> {
        self.records.clear().await?;
        self.session().clear();
        debug!("session reset");
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
