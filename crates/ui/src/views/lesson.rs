use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{ReviewVm, map_lesson, map_review};

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    // Review results are keyed by unit index so they vanish when another lesson opens.
    let mut review = use_signal(|| None::<(usize, ViewState<ReviewVm>)>);

    ui.track();
    let session = progress.snapshot();
    let lesson = session
        .open_lesson()
        .map(|open| map_lesson(open, &session));

    let on_complete = {
        let progress = progress.clone();
        use_callback(move |index: usize| {
            let progress = progress.clone();
            ui.run(async move {
                match progress.complete_unit(index).await {
                    Ok(_) => {
                        ui.show_alert("🎉 课程学习完成！");
                        navigator.push(Route::Courses {});
                    }
                    Err(err) => ui.show_alert(ViewError::from(err).message()),
                }
            });
        })
    };

    let on_next = {
        let progress = progress.clone();
        use_callback(move |index: usize| {
            let progress = progress.clone();
            ui.run(async move {
                if let Err(err) = progress.open_unit(index).await {
                    ui.show_alert(format!("加载课程失败：{}", ViewError::from(err).message()));
                }
            });
        })
    };

    let on_review = use_callback(move |index: usize| {
        let progress = progress.clone();
        ui.run(async move {
            let plan = progress.snapshot().plan().cloned();
            let result = progress
                .fetch_review(index)
                .await
                .map(|plan_review| map_review(&plan_review, plan.as_ref()));
            review.set(Some((index, ViewState::from_result(result))));
        });
    });

    let Some(lesson) = lesson else {
        return rsx! {
            div { class: "page lesson-page",
                h2 { "课程内容" }
                p { "请先在课程列表中选择一节课。" }
                Link { class: "btn btn-primary", to: Route::Courses {}, "返回课程列表" }
            }
        };
    };

    let index = lesson.index;
    let review_state = review()
        .filter(|(reviewed, _)| *reviewed == index)
        .map(|(_, state)| state);

    rsx! {
        div { class: "page lesson-page",
            h2 { "{lesson.title}" }
            div { class: "lesson-section",
                h3 { "🤔 问题引入" }
                div { class: "markdown-content", dangerous_inner_html: "{lesson.introduction_html}" }
            }
            div { class: "lesson-section",
                h3 { "📚 核心讲解" }
                div { class: "markdown-content", dangerous_inner_html: "{lesson.explanation_html}" }
            }
            if !lesson.examples_html.is_empty() {
                div { class: "lesson-section",
                    h3 { "💡 示例" }
                    ul {
                        for example in lesson.examples_html.clone() {
                            li { dangerous_inner_html: "{example}" }
                        }
                    }
                }
            }
            if !lesson.exercises_html.is_empty() {
                div { class: "lesson-section",
                    h3 { "✏️ 练习题" }
                    ul {
                        for exercise in lesson.exercises_html.clone() {
                            li { dangerous_inner_html: "{exercise}" }
                        }
                    }
                }
            }

            div { class: "lesson-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_complete.call(index),
                    "完成本课"
                }
                if let Some(next) = lesson.next_index {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_next.call(next),
                        "下一课"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_review.call(index),
                    "复习建议"
                }
                Link { class: "btn btn-secondary", to: Route::Feedback {}, "反馈" }
                Link { class: "btn btn-link", to: Route::Courses {}, "返回课程列表" }
            }

            match review_state {
                None => rsx! {},
                Some(ViewState::Idle) => rsx! {},
                Some(ViewState::Error(err)) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                Some(ViewState::Ready(review)) => rsx! {
                    section { class: "review-panel",
                        h3 { "🔁 复习建议" }
                        if review.is_empty() {
                            p { "暂时不需要复习，继续加油！" }
                        }
                        ul {
                            for item in review.items {
                                li {
                                    strong { "{item.reference}：" }
                                    span { dangerous_inner_html: "{item.reason_html}" }
                                }
                            }
                        }
                        if !review.exercises_html.is_empty() {
                            h4 { "综合练习" }
                            ul {
                                for exercise in review.exercises_html {
                                    li { dangerous_inner_html: "{exercise}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
