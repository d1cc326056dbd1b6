use study_core::model::Profile;

use crate::vm::markdown_vm::format_markdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSectionVm {
    pub heading: &'static str,
    pub items_html: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummaryVm {
    pub id_label: String,
    pub summary_html: String,
    pub sections: Vec<ProfileSectionVm>,
}

#[must_use]
pub fn map_profile_summary(profile: &Profile) -> ProfileSummaryVm {
    let section = |heading, items: &[String]| ProfileSectionVm {
        heading,
        items_html: items
            .iter()
            .map(|item| format_markdown(Some(item)))
            .collect(),
    };

    ProfileSummaryVm {
        id_label: profile.id.to_string(),
        summary_html: format_markdown(Some(&profile.summary)),
        sections: vec![
            section("优势：", &profile.strengths),
            section("薄弱点：", &profile.weaknesses),
            section("学习偏好：", &profile.preferences),
            section("风险点：", &profile.risk_points),
        ],
    }
}

/// Inline error shown under a form.
#[must_use]
pub fn error_html(message: &str) -> String {
    format!(r#"<p class="error">❌ 错误：{message}</p>"#)
}
