use serde::{Deserialize, Serialize};

use crate::model::ids::{PlanId, UnitId};

/// Body of both `POST /lesson` and `POST /review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRequest {
    pub plan_id: PlanId,
    pub unit_id: UnitId,
}

/// Teaching content for a single unit. Fetched on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub unit_id: UnitId,
    pub introduction: String,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// Something the learner should revisit before moving on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_unit_id: Option<UnitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_point_id: Option<String>,
    pub reason: String,
}

impl ReviewItem {
    /// The unit id when present, otherwise the knowledge point id.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference_unit_id
            .as_ref()
            .map(UnitId::as_str)
            .or(self.knowledge_point_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPlan {
    pub items: Vec<ReviewItem>,
    #[serde(default)]
    pub combined_exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgePoint {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: u8,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Knowledge points for a topic, as built by the server before planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub topic: String,
    pub nodes: Vec<KnowledgePoint>,
}
