use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{PlanId, ProfileId, UnitId};
use crate::model::timestamp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanTopicError {
    #[error("topic cannot be empty")]
    Empty,
}

/// Trim a plan topic and reject blank input.
///
/// # Errors
///
/// Returns `PlanTopicError::Empty` when nothing but whitespace was entered.
pub fn validate_topic(raw: &str) -> Result<String, PlanTopicError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlanTopicError::Empty);
    }
    Ok(trimmed.to_owned())
}

const fn default_estimated_minutes() -> u32 {
    30
}

/// One lesson within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub title: String,
    #[serde(default)]
    pub knowledge_points: Vec<String>,
    #[serde(default = "default_estimated_minutes")]
    pub estimated_time_minutes: u32,
    #[serde(default)]
    pub order: u32,
}

/// An ordered curriculum of units for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    pub topic: String,
    pub summary: String,
    pub units: Vec<Unit>,
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
}

impl Plan {
    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// Index of the last unit, or `None` for an empty plan.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.units.len().checked_sub(1)
    }

    /// Sum of the estimated durations of all units.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.units
            .iter()
            .map(|unit| unit.estimated_time_minutes)
            .fold(0_u32, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_duration_defaults_to_thirty_minutes() {
        let unit: Unit = serde_json::from_str(r#"{"id": "u1", "title": "Intro"}"#).unwrap();
        assert_eq!(unit.estimated_time_minutes, 30);
        assert!(unit.knowledge_points.is_empty());
    }

    #[test]
    fn plan_helpers_handle_empty_units() {
        let plan: Plan =
            serde_json::from_str(r#"{"id": 1, "topic": "Rust", "summary": "", "units": []}"#)
                .unwrap();
        assert_eq!(plan.last_index(), None);
        assert_eq!(plan.total_minutes(), 0);
        assert!(plan.unit(0).is_none());
    }

    #[test]
    fn topic_is_trimmed_and_required() {
        assert_eq!(validate_topic("  Rust  ").unwrap(), "Rust");
        assert_eq!(validate_topic(" \n").unwrap_err(), PlanTopicError::Empty);
    }

    #[test]
    fn decodes_naive_server_timestamps() {
        let plan: Plan = serde_json::from_str(
            r#"{"id": 1, "topic": "Rust", "summary": "", "units": [],
                "created_at": "2025-01-01T12:34:56.789012",
                "updated_at": "2025-01-02T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(plan.created_at.is_some());
        assert_eq!(
            plan.updated_at.map(|t| t.to_string()).as_deref(),
            Some("2025-01-02 08:00:00")
        );
    }
}
