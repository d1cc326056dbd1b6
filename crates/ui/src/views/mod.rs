mod courses;
mod feedback;
mod home;
mod lesson;
mod plan;
mod profile;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use courses::CoursesView;
pub use feedback::FeedbackView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use plan::PlanView;
pub use profile::ProfileView;
#[cfg(test)]
pub(crate) use profile::ProfileTestHandles;
pub use state::{ViewError, ViewState};
