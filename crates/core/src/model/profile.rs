use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ProfileId;
use crate::model::timestamp;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileInputError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
}

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

/// Raw form values for creating a profile, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub stage: String,
    pub direction: String,
    pub plan: String,
    pub goal: String,
    pub pace: String,
}

impl ProfileDraft {
    /// Trim every field and require all of them.
    ///
    /// # Errors
    ///
    /// Returns `ProfileInputError::EmptyField` naming the first blank field.
    pub fn validate(self) -> Result<ProfileInput, ProfileInputError> {
        Ok(ProfileInput {
            stage: required("stage", self.stage)?,
            direction: required("direction", self.direction)?,
            plan: required("plan", self.plan)?,
            goal: required("goal", self.goal)?,
            pace: required("pace", self.pace)?,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, ProfileInputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileInputError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Validated profile input; this is the `POST /profile` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    stage: String,
    direction: String,
    plan: String,
    goal: String,
    pace: String,
}

impl ProfileInput {
    #[must_use]
    pub fn stage(&self) -> &str {
        &self.stage
    }

    #[must_use]
    pub fn direction(&self) -> &str {
        &self.direction
    }

    #[must_use]
    pub fn plan(&self) -> &str {
        &self.plan
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn pace(&self) -> &str {
        &self.pace
    }
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// Learner profile as summarised by the profiling service.
///
/// The server only echoes derived fields; the original form inputs are attached
/// client-side with [`Profile::with_input`] so the plan form can reuse `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub risk_points: Vec<String>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ProfileInput>,
}

impl Profile {
    #[must_use]
    pub fn with_input(mut self, input: ProfileInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Learning direction entered by the learner, if known.
    #[must_use]
    pub fn direction(&self) -> Option<&str> {
        self.input.as_ref().map(ProfileInput::direction)
    }
}
