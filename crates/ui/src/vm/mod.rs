mod course_vm;
mod feedback_vm;
mod knowledge_graph_vm;
mod lesson_vm;
mod markdown_vm;
mod profile_vm;
mod review_vm;

pub use course_vm::{
    CourseItemVm, CourseListVm, RecentPlanVm, StatusBadge, map_course_list, map_recent_plan,
    status_badge,
};
pub use feedback_vm::{
    FeedbackForm, feedback_success_message, parse_preferred_changes, rating_options,
};
pub use knowledge_graph_vm::{KnowledgePointVm, map_knowledge_graph};
pub use lesson_vm::{LessonVm, map_lesson};
pub use markdown_vm::format_markdown;
pub use profile_vm::{ProfileSectionVm, ProfileSummaryVm, error_html, map_profile_summary};
pub use review_vm::{ReviewItemVm, ReviewVm, map_review};
