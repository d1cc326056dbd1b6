use study_core::model::{FeedbackDraft, FeedbackResult, RATING_RANGE};

/// Ratings offered by the satisfaction and difficulty selects.
#[must_use]
pub fn rating_options() -> Vec<u8> {
    RATING_RANGE.collect()
}

/// Split the free-text "preferred changes" field on ASCII or full-width commas.
#[must_use]
pub fn parse_preferred_changes(raw: &str) -> Vec<String> {
    raw.split([',', '，'])
        .map(str::trim)
        .filter(|change| !change.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Raw feedback form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackForm {
    pub satisfaction: String,
    pub difficulty: String,
    pub comment: String,
    pub preferred_changes: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        let defaults = FeedbackDraft::default();
        Self {
            satisfaction: defaults.satisfaction.to_string(),
            difficulty: defaults.difficulty.to_string(),
            comment: String::new(),
            preferred_changes: String::new(),
        }
    }
}

impl FeedbackForm {
    /// Convert to a draft; an unparsable rating becomes 0 and is rejected by
    /// validation downstream.
    #[must_use]
    pub fn to_draft(&self) -> FeedbackDraft {
        let rating = |raw: &str| raw.trim().parse::<u8>().unwrap_or(0);
        FeedbackDraft {
            satisfaction: rating(&self.satisfaction),
            difficulty: rating(&self.difficulty),
            comment: self.comment.clone(),
            preferred_changes: parse_preferred_changes(&self.preferred_changes),
        }
    }
}

#[must_use]
pub fn feedback_success_message(result: &FeedbackResult) -> String {
    match result.plan_adjustment_summary.as_deref() {
        Some(summary) if !summary.trim().is_empty() => {
            format!("💬 反馈提交成功！感谢你的建议！\n{summary}")
        }
        _ => "💬 反馈提交成功！感谢你的建议！".to_owned(),
    }
}
