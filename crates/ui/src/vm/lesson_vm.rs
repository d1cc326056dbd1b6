use study_core::{LearningSession, OpenLesson};

use crate::vm::markdown_vm::format_markdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub index: usize,
    pub title: String,
    pub introduction_html: String,
    pub explanation_html: String,
    pub examples_html: Vec<String>,
    pub exercises_html: Vec<String>,
    /// Index of the following unit when it is already unlocked.
    pub next_index: Option<usize>,
}

#[must_use]
pub fn map_lesson(open: &OpenLesson, session: &LearningSession) -> LessonVm {
    let format_all = |items: &[String]| {
        items
            .iter()
            .map(|item| format_markdown(Some(item)))
            .collect::<Vec<_>>()
    };

    LessonVm {
        index: open.index,
        title: open.unit.title.clone(),
        introduction_html: format_markdown(Some(&open.content.introduction)),
        explanation_html: format_markdown(Some(&open.content.explanation)),
        examples_html: format_all(&open.content.examples),
        exercises_html: format_all(&open.content.exercises),
        next_index: session.next_openable(open.index),
    }
}
