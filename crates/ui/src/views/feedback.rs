use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{FeedbackForm, feedback_success_message, rating_options};

#[component]
pub fn FeedbackView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    let mut form = use_signal(FeedbackForm::default);

    let on_submit = use_callback(move |()| {
        let progress = progress.clone();
        let draft = form().to_draft();
        ui.run(async move {
            match progress.submit_feedback(draft).await {
                Ok(result) => {
                    ui.show_alert(feedback_success_message(&result));
                    form.set(FeedbackForm::default());
                    navigator.push(Route::Courses {});
                }
                Err(err) => {
                    ui.show_alert(format!("提交反馈失败：{}", ViewError::from(err).message()));
                }
            }
        });
    });

    let values = form();

    rsx! {
        div { class: "page feedback-page",
            h2 { "学习反馈" }
            form {
                class: "feedback-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { "满意度"
                    select {
                        name: "satisfaction",
                        value: "{values.satisfaction}",
                        onchange: move |evt| form.write().satisfaction = evt.value(),
                        for rating in rating_options() {
                            option { value: "{rating}", "{rating}" }
                        }
                    }
                }
                label { "难度感受"
                    select {
                        name: "difficulty",
                        value: "{values.difficulty}",
                        onchange: move |evt| form.write().difficulty = evt.value(),
                        for rating in rating_options() {
                            option { value: "{rating}", "{rating}" }
                        }
                    }
                }
                label { "意见与建议"
                    textarea {
                        name: "comment",
                        value: "{values.comment}",
                        oninput: move |evt| form.write().comment = evt.value(),
                    }
                }
                label { "希望的调整（用逗号分隔）"
                    input {
                        name: "preferred_changes",
                        placeholder: "例如：节奏放慢，多些例子",
                        value: "{values.preferred_changes}",
                        oninput: move |evt| form.write().preferred_changes = evt.value(),
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "提交反馈" }
            }
        }
    }
}
