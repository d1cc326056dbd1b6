mod feedback;
mod ids;
mod lesson;
mod plan;
mod profile;
mod progress;
mod timestamp;

pub use ids::{PlanId, ProfileId, UnitId};

pub use feedback::{FeedbackDraft, FeedbackError, FeedbackInput, FeedbackResult, RATING_RANGE};
pub use lesson::{
    KnowledgeGraph, KnowledgePoint, LessonContent, ReviewItem, ReviewPlan, UnitRequest,
};
pub use plan::{Plan, PlanTopicError, Unit, validate_topic};
pub use profile::{Profile, ProfileDraft, ProfileInput, ProfileInputError};
pub use progress::{CompletedLessons, Progress, UnitStatus};
