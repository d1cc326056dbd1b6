use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{KnowledgePointVm, error_html, map_knowledge_graph};

#[component]
pub fn PlanView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    let initial_topic = progress
        .snapshot()
        .profile()
        .and_then(|profile| profile.direction())
        .unwrap_or_default()
        .to_owned();
    let mut topic = use_signal(move || initial_topic);
    let mut error = use_signal(|| None::<ViewError>);
    let mut graph = use_signal(|| ViewState::<Vec<KnowledgePointVm>>::Idle);

    let on_submit = {
        let progress = progress.clone();
        use_callback(move |()| {
            let progress = progress.clone();
            let topic = topic();
            ui.run(async move {
                match progress.create_plan(&topic).await {
                    Ok(_) => {
                        error.set(None);
                        navigator.push(Route::Courses {});
                    }
                    Err(err) => error.set(Some(ViewError::from(err))),
                }
            });
        })
    };

    let on_preview = use_callback(move |()| {
        let progress = progress.clone();
        let topic = topic();
        ui.run(async move {
            let result = progress
                .knowledge_graph(&topic)
                .await
                .map(|graph| map_knowledge_graph(&graph));
            graph.set(ViewState::from_result(result));
        });
    });

    let error_markup = error().map(|err| error_html(err.message()));

    rsx! {
        div { class: "page plan-page",
            h2 { "生成学习计划" }
            form {
                class: "plan-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { "学习主题"
                    input {
                        name: "topic",
                        placeholder: "例如：线性代数",
                        value: "{topic}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_preview.call(()),
                        "预览知识网"
                    }
                    button { class: "btn btn-primary", r#type: "submit", "生成计划" }
                }
            }

            if let Some(html) = error_markup {
                div { class: "result", dangerous_inner_html: "{html}" }
            }

            match graph() {
                ViewState::Idle => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(points) => rsx! {
                    section { class: "knowledge-graph",
                        h3 { "知识网预览" }
                        if points.is_empty() {
                            p { "暂无知识点" }
                        }
                        ul {
                            for point in points {
                                li { class: "knowledge-point",
                                    h4 { "{point.name}" }
                                    span { class: "difficulty", "{point.difficulty_label}" }
                                    div { dangerous_inner_html: "{point.description_html}" }
                                    if let Some(prerequisites) = point.prerequisites_label {
                                        p { class: "prerequisites", "{prerequisites}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
