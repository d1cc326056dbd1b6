//! Client-side learning progress: which units are unlocked, which are done,
//! and which lesson is currently open.

use thiserror::Error;

use crate::model::{
    CompletedLessons, LessonContent, Plan, Profile, ProfileId, Progress, Unit, UnitId, UnitStatus,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("no learning plan has been created yet")]
    NoPlan,

    #[error("unit {index} does not exist (plan has {len} units)")]
    UnitOutOfRange { index: usize, len: usize },

    #[error("unit {index} is locked (frontier is {frontier})")]
    UnitLocked { index: usize, frontier: usize },

    #[error("unit {index} is not the open lesson")]
    NotOpen { index: usize },

    #[error("the plan changed while unit {index} was loading")]
    PlanChanged { index: usize },
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoSession,
    ProfileOnly,
    InProgress,
    AllUnlocked,
}

//
// ─── OPEN LESSON / OUTCOME ─────────────────────────────────────────────────────
//

/// The unit currently being studied, with its fetched content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenLesson {
    pub index: usize,
    pub unit: Unit,
    pub content: LessonContent,
}

/// What changed when a unit was marked complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub unit_id: UnitId,
    pub newly_completed: bool,
    pub frontier: usize,
    pub frontier_advanced: bool,
    pub all_unlocked: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory learning session.
///
/// Holds the profile, plan, frontier and completed set mirrored to storage, plus
/// the open lesson which is never persisted. All transitions are synchronous;
/// network and storage I/O live in the services layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearningSession {
    profile: Option<Profile>,
    plan: Option<Plan>,
    progress: Progress,
    completed: CompletedLessons,
    open_lesson: Option<OpenLesson>,
}

impl LearningSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted records.
    ///
    /// Progress and completions are only meaningful next to a plan, so they are
    /// dropped when the plan is missing. A stored frontier past the end of the
    /// plan is pulled back to the last unit.
    #[must_use]
    pub fn restore(
        profile: Option<Profile>,
        plan: Option<Plan>,
        progress: Option<Progress>,
        completed: Option<CompletedLessons>,
    ) -> Self {
        let (progress, completed) = match &plan {
            Some(plan) => (
                progress.unwrap_or_default().clamped(plan.last_index()),
                completed.unwrap_or_default(),
            ),
            None => (Progress::default(), CompletedLessons::default()),
        };

        Self {
            profile,
            plan,
            progress,
            completed,
            open_lesson: None,
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn profile_id(&self) -> Option<ProfileId> {
        self.profile.as_ref().map(|profile| profile.id)
    }

    #[must_use]
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn frontier(&self) -> usize {
        self.progress.frontier()
    }

    #[must_use]
    pub fn completed(&self) -> &CompletedLessons {
        &self.completed
    }

    #[must_use]
    pub fn open_lesson(&self) -> Option<&OpenLesson> {
        self.open_lesson.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.profile, &self.plan) {
            (_, Some(plan)) => {
                let all_unlocked = plan
                    .last_index()
                    .is_none_or(|last| self.frontier() >= last);
                if all_unlocked {
                    SessionPhase::AllUnlocked
                } else {
                    SessionPhase::InProgress
                }
            }
            (Some(_), None) => SessionPhase::ProfileOnly,
            (None, None) => SessionPhase::NoSession,
        }
    }

    /// A session can be continued only when both a profile and a plan exist.
    #[must_use]
    pub fn has_saved_session(&self) -> bool {
        self.profile.is_some() && self.plan.is_some()
    }

    pub fn replace_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Install a new plan; the frontier and completed set start over.
    pub fn replace_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
        self.progress = Progress::default();
        self.completed = CompletedLessons::default();
        self.open_lesson = None;
    }

    /// Status of every unit in plan order.
    #[must_use]
    pub fn unit_statuses(&self) -> Vec<UnitStatus> {
        let Some(plan) = &self.plan else {
            return Vec::new();
        };
        plan.units
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                UnitStatus::derive(index, &unit.id, self.frontier(), &self.completed)
            })
            .collect()
    }

    #[must_use]
    pub fn status_of(&self, index: usize) -> Option<UnitStatus> {
        let unit = self.plan.as_ref()?.unit(index)?;
        Some(UnitStatus::derive(
            index,
            &unit.id,
            self.frontier(),
            &self.completed,
        ))
    }

    /// Check that `index` may be opened and return its unit.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NoPlan`, `UnitOutOfRange` or `UnitLocked`.
    pub fn openable_unit(&self, index: usize) -> Result<&Unit, ProgressError> {
        let plan = self.plan.as_ref().ok_or(ProgressError::NoPlan)?;
        let unit = plan.unit(index).ok_or(ProgressError::UnitOutOfRange {
            index,
            len: plan.units.len(),
        })?;
        if index > self.frontier() {
            return Err(ProgressError::UnitLocked {
                index,
                frontier: self.frontier(),
            });
        }
        Ok(unit)
    }

    /// Make `index` the open lesson with freshly fetched content.
    ///
    /// # Errors
    ///
    /// Same as [`Self::openable_unit`]; the session is unchanged on error.
    pub fn open(
        &mut self,
        index: usize,
        content: LessonContent,
    ) -> Result<&OpenLesson, ProgressError> {
        let unit = self.openable_unit(index)?.clone();
        let open = self.open_lesson.insert(OpenLesson {
            index,
            unit,
            content,
        });
        Ok(&*open)
    }

    /// Mark the open lesson complete, advancing the frontier when it was the frontier unit.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotOpen` when `index` is not the open lesson and
    /// `ProgressError::NoPlan` when no plan exists.
    pub fn complete(&mut self, index: usize) -> Result<CompletionOutcome, ProgressError> {
        let plan = self.plan.as_ref().ok_or(ProgressError::NoPlan)?;
        let open = self
            .open_lesson
            .as_ref()
            .filter(|open| open.index == index)
            .ok_or(ProgressError::NotOpen { index })?;

        let unit_id = open.unit.id.clone();
        let last_index = plan.last_index().unwrap_or(0);

        let newly_completed = self.completed.insert(unit_id.clone());
        let frontier_advanced = index == self.frontier() && self.progress.advance(last_index);

        Ok(CompletionOutcome {
            unit_id,
            newly_completed,
            frontier: self.frontier(),
            frontier_advanced,
            all_unlocked: self.frontier() >= last_index,
        })
    }

    /// The unit after `index`, when it exists and is unlocked.
    #[must_use]
    pub fn next_openable(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        self.openable_unit(next).ok().map(|_| next)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlanId, ProfileId};

    fn unit(id: &str) -> Unit {
        Unit {
            id: UnitId::new(id),
            title: format!("Unit {id}"),
            knowledge_points: Vec::new(),
            estimated_time_minutes: 30,
            order: 0,
        }
    }

    fn plan(id: u64, unit_ids: &[&str]) -> Plan {
        Plan {
            id: PlanId::new(id),
            profile_id: None,
            topic: "Rust".into(),
            summary: "summary".into(),
            units: unit_ids.iter().map(|id| unit(id)).collect(),
            created_at: None,
            updated_at: None,
        }
    }

    fn profile() -> Profile {
        Profile {
            id: ProfileId::new(1),
            summary: "learner".into(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            preferences: Vec::new(),
            risk_points: Vec::new(),
            created_at: None,
            updated_at: None,
            input: None,
        }
    }

    fn content(unit_id: &str) -> LessonContent {
        LessonContent {
            unit_id: UnitId::new(unit_id),
            introduction: "intro".into(),
            explanation: "body".into(),
            examples: Vec::new(),
            exercises: Vec::new(),
        }
    }

    fn open_and_complete(session: &mut LearningSession, index: usize) -> CompletionOutcome {
        let unit_id = session.plan().unwrap().units[index].id.as_str().to_owned();
        session.open(index, content(&unit_id)).unwrap();
        session.complete(index).unwrap()
    }

    #[test]
    fn phases_follow_profile_and_plan() {
        let mut session = LearningSession::new();
        assert_eq!(session.phase(), SessionPhase::NoSession);

        session.replace_profile(profile());
        assert_eq!(session.phase(), SessionPhase::ProfileOnly);
        assert!(!session.has_saved_session());

        session.replace_plan(plan(1, &["u0", "u1"]));
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert!(session.has_saved_session());

        open_and_complete(&mut session, 0);
        assert_eq!(session.phase(), SessionPhase::AllUnlocked);
    }

    #[test]
    fn completing_frontier_unlocks_next_unit() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));

        let outcome = open_and_complete(&mut session, 0);

        assert!(outcome.frontier_advanced);
        assert_eq!(session.frontier(), 1);
        assert!(session.completed().contains(&UnitId::new("u0")));
        assert_eq!(
            session.unit_statuses(),
            vec![UnitStatus::Completed, UnitStatus::Current, UnitStatus::Locked]
        );
    }

    #[test]
    fn locked_units_cannot_be_opened() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));

        let err = session.open(2, content("u2")).unwrap_err();
        assert_eq!(err, ProgressError::UnitLocked { index: 2, frontier: 0 });
        assert!(session.open_lesson().is_none());

        let err = session.open(7, content("u7")).unwrap_err();
        assert_eq!(err, ProgressError::UnitOutOfRange { index: 7, len: 3 });
    }

    #[test]
    fn open_without_plan_is_rejected() {
        let mut session = LearningSession::new();
        assert_eq!(
            session.open(0, content("u0")).unwrap_err(),
            ProgressError::NoPlan
        );
    }

    #[test]
    fn completing_requires_the_open_unit() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1"]));
        assert_eq!(
            session.complete(0).unwrap_err(),
            ProgressError::NotOpen { index: 0 }
        );

        session.open(0, content("u0")).unwrap();
        assert_eq!(
            session.complete(1).unwrap_err(),
            ProgressError::NotOpen { index: 1 }
        );
    }

    #[test]
    fn repeated_completion_is_idempotent() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));
        session.open(0, content("u0")).unwrap();

        let first = session.complete(0).unwrap();
        let second = session.complete(0).unwrap();

        assert!(first.newly_completed);
        assert!(!second.newly_completed);
        assert!(!second.frontier_advanced);
        assert_eq!(session.completed().len(), 1);
        assert_eq!(session.frontier(), 1);
    }

    #[test]
    fn reviewing_an_earlier_unit_does_not_move_frontier() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));
        open_and_complete(&mut session, 0);
        open_and_complete(&mut session, 1);
        assert_eq!(session.frontier(), 2);

        let outcome = open_and_complete(&mut session, 0);
        assert!(!outcome.frontier_advanced);
        assert_eq!(session.frontier(), 2);
    }

    #[test]
    fn frontier_is_monotonic_and_bounded() {
        let unit_ids = ["a", "b", "c", "d"];
        let sequences: [&[usize]; 4] = [
            &[0, 1, 2, 3, 3],
            &[0, 0, 1, 0, 2],
            &[0, 1, 1, 2, 3, 0],
            &[0],
        ];

        for sequence in sequences {
            let mut session = LearningSession::new();
            session.replace_plan(plan(1, &unit_ids));
            let mut last_frontier = session.frontier();
            let mut last_completed = 0;

            for &index in sequence {
                open_and_complete(&mut session, index);
                assert!(session.frontier() >= last_frontier);
                assert!(session.frontier() <= unit_ids.len() - 1);
                assert!(session.completed().len() >= last_completed);

                let mut ids: Vec<_> = session.completed().iter().collect();
                let before = ids.len();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), before, "duplicate completed ids");

                last_frontier = session.frontier();
                last_completed = session.completed().len();
            }
        }
    }

    #[test]
    fn last_unit_completion_reports_all_unlocked() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1"]));
        let first = open_and_complete(&mut session, 0);
        assert!(first.all_unlocked);

        let last = open_and_complete(&mut session, 1);
        assert!(!last.frontier_advanced);
        assert_eq!(last.frontier, 1);
        assert_eq!(session.status_of(1), Some(UnitStatus::Completed));
    }

    #[test]
    fn replacing_plan_resets_progress() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));
        open_and_complete(&mut session, 0);

        session.replace_plan(plan(2, &["x0", "x1"]));

        assert_eq!(session.frontier(), 0);
        assert!(session.completed().is_empty());
        assert!(session.open_lesson().is_none());
        assert_eq!(session.plan().unwrap().units[0].id, UnitId::new("x0"));
    }

    #[test]
    fn restore_clamps_frontier_and_drops_orphan_progress() {
        let restored = LearningSession::restore(
            Some(profile()),
            Some(plan(1, &["u0", "u1"])),
            Some(Progress::new(5)),
            Some(CompletedLessons::from_ids(vec![UnitId::new("u0")])),
        );
        assert_eq!(restored.frontier(), 1);
        assert_eq!(restored.completed().len(), 1);

        let orphan = LearningSession::restore(
            Some(profile()),
            None,
            Some(Progress::new(3)),
            Some(CompletedLessons::from_ids(vec![UnitId::new("u0")])),
        );
        assert_eq!(orphan.frontier(), 0);
        assert!(orphan.completed().is_empty());
        assert_eq!(orphan.phase(), SessionPhase::ProfileOnly);
    }

    #[test]
    fn next_openable_respects_frontier() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &["u0", "u1", "u2"]));
        assert_eq!(session.next_openable(0), None);

        open_and_complete(&mut session, 0);
        assert_eq!(session.next_openable(0), Some(1));
        assert_eq!(session.next_openable(1), None);
        assert_eq!(session.next_openable(2), None);
    }

    #[test]
    fn empty_plan_is_all_unlocked() {
        let mut session = LearningSession::new();
        session.replace_plan(plan(1, &[]));
        assert_eq!(session.phase(), SessionPhase::AllUnlocked);
        assert!(session.unit_statuses().is_empty());
    }
}
