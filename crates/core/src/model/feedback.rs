use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{PlanId, ProfileId, UnitId};
use crate::model::profile::Profile;

/// Ratings are collected on a 1..=5 scale.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("satisfaction must be between 1 and 5 (got {0})")]
    SatisfactionOutOfRange(u8),

    #[error("difficulty must be between 1 and 5 (got {0})")]
    DifficultyOutOfRange(u8),
}

/// Form values for feedback. Ids are filled in from the session when submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub satisfaction: u8,
    pub difficulty: u8,
    pub comment: String,
    pub preferred_changes: Vec<String>,
}

impl Default for FeedbackDraft {
    fn default() -> Self {
        Self {
            satisfaction: 5,
            difficulty: 3,
            comment: String::new(),
            preferred_changes: Vec::new(),
        }
    }
}

impl FeedbackDraft {
    /// Validate ratings and attach session context.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` when a rating falls outside 1..=5.
    pub fn validate(
        self,
        profile_id: ProfileId,
        plan_id: Option<PlanId>,
        unit_id: Option<UnitId>,
    ) -> Result<FeedbackInput, FeedbackError> {
        if !RATING_RANGE.contains(&self.satisfaction) {
            return Err(FeedbackError::SatisfactionOutOfRange(self.satisfaction));
        }
        if !RATING_RANGE.contains(&self.difficulty) {
            return Err(FeedbackError::DifficultyOutOfRange(self.difficulty));
        }

        let preferred_changes = self
            .preferred_changes
            .into_iter()
            .map(|change| change.trim().to_owned())
            .filter(|change| !change.is_empty())
            .collect();

        Ok(FeedbackInput {
            profile_id,
            plan_id,
            unit_id,
            satisfaction: self.satisfaction,
            difficulty: self.difficulty,
            comment: self.comment.trim().to_owned(),
            preferred_changes,
        })
    }
}

/// `POST /feedback` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub profile_id: ProfileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<UnitId>,
    pub satisfaction: u8,
    pub difficulty: u8,
    pub comment: String,
    pub preferred_changes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    #[serde(default)]
    pub profile_updates: Option<Profile>,
    #[serde(default)]
    pub plan_adjustment_summary: Option<String>,
}
