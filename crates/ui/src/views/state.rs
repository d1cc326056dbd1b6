use services::ProgressServiceError;
use study_core::InputError;
use study_core::ProgressError;
use study_core::model::{FeedbackError, PlanTopicError, ProfileInputError};
use tracing::warn;

/// A failure ready to show to the learner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    message: String,
}

impl ViewError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ProgressServiceError> for ViewError {
    fn from(err: ProgressServiceError) -> Self {
        warn!(error = %err, "study operation failed");
        let message = match &err {
            ProgressServiceError::InvalidInput(InputError::Profile(
                ProfileInputError::EmptyField { field },
            )) => format!("请填写{}", field_label(field)),
            ProgressServiceError::InvalidInput(InputError::Topic(PlanTopicError::Empty)) => {
                "请输入学习主题".to_owned()
            }
            ProgressServiceError::InvalidInput(InputError::Feedback(
                FeedbackError::SatisfactionOutOfRange(_) | FeedbackError::DifficultyOutOfRange(_),
            )) => "评分需在 1 到 5 之间".to_owned(),
            ProgressServiceError::Progress(ProgressError::NoPlan) => {
                "请先生成学习计划".to_owned()
            }
            ProgressServiceError::Progress(ProgressError::UnitLocked { .. }) => {
                "该课程尚未解锁".to_owned()
            }
            ProgressServiceError::Progress(ProgressError::UnitOutOfRange { .. }) => {
                "课程不存在".to_owned()
            }
            ProgressServiceError::Progress(ProgressError::NotOpen { .. }) => {
                "请先打开该课程".to_owned()
            }
            ProgressServiceError::Progress(ProgressError::PlanChanged { .. }) => {
                "学习计划已更新，请重新选择课程".to_owned()
            }
            ProgressServiceError::Storage(storage) => format!("保存进度失败：{storage}"),
            ProgressServiceError::NoProfile => "请先创建用户画像".to_owned(),
            _ => err.to_string(),
        };
        Self { message }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "stage" => "学习阶段",
        "direction" => "学习方向",
        "plan" => "学习计划",
        "goal" => "学习目标",
        "pace" => "学习节奏",
        other => other,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    pub fn from_result<E: Into<ViewError>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => ViewState::Error(err.into()),
        }
    }
}
