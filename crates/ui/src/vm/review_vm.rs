use study_core::model::{Plan, ReviewPlan};

use crate::vm::markdown_vm::format_markdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub reference: String,
    pub reason_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub items: Vec<ReviewItemVm>,
    pub exercises_html: Vec<String>,
}

impl ReviewVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.exercises_html.is_empty()
    }
}

/// Review suggestions with unit ids resolved to unit titles where possible.
#[must_use]
pub fn map_review(review: &ReviewPlan, plan: Option<&Plan>) -> ReviewVm {
    let unit_title = |id: &str| {
        plan.and_then(|plan| plan.units.iter().find(|unit| unit.id.as_str() == id))
            .map(|unit| unit.title.clone())
    };

    let items = review
        .items
        .iter()
        .map(|item| {
            let reference = match item.reference() {
                Some(id) => unit_title(id).unwrap_or_else(|| id.to_owned()),
                None => "综合".to_owned(),
            };
            ReviewItemVm {
                reference,
                reason_html: format_markdown(Some(&item.reason)),
            }
        })
        .collect();

    ReviewVm {
        items,
        exercises_html: review
            .combined_exercises
            .iter()
            .map(|exercise| format_markdown(Some(exercise)))
            .collect(),
    }
}
