use dioxus::prelude::*;
use dioxus_router::use_navigator;
use study_core::model::ProfileDraft;

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{ProfileSummaryVm, error_html, map_profile_summary};

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    let mut form = use_signal(ProfileDraft::default);
    let mut result = use_signal(|| ViewState::<ProfileSummaryVm>::Idle);
    let mut show_form = use_signal(|| true);

    let on_submit = use_callback(move |()| {
        let progress = progress.clone();
        let draft = form();
        ui.run(async move {
            match progress.create_profile(draft).await {
                Ok(profile) => {
                    result.set(ViewState::Ready(map_profile_summary(&profile)));
                    form.set(ProfileDraft::default());
                    show_form.set(false);
                }
                Err(err) => result.set(ViewState::Error(ViewError::from(err))),
            }
        });
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ProfileTestHandles>() {
            handles.register(on_submit, form);
        }
    });

    let draft = form();

    rsx! {
        div { class: "page profile-page",
            h2 { "创建用户画像" }

            if show_form() {
                form {
                    class: "profile-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    label { "学习阶段"
                        input {
                            name: "stage",
                            placeholder: "例如：大学 / 工作 / 转行",
                            value: "{draft.stage}",
                            oninput: move |evt| form.write().stage = evt.value(),
                        }
                    }
                    label { "学习方向"
                        input {
                            name: "direction",
                            placeholder: "例如：前端、算法、物理",
                            value: "{draft.direction}",
                            oninput: move |evt| form.write().direction = evt.value(),
                        }
                    }
                    label { "学习计划"
                        textarea {
                            name: "plan",
                            value: "{draft.plan}",
                            oninput: move |evt| form.write().plan = evt.value(),
                        }
                    }
                    label { "学习目标"
                        input {
                            name: "goal",
                            value: "{draft.goal}",
                            oninput: move |evt| form.write().goal = evt.value(),
                        }
                    }
                    label { "学习节奏"
                        input {
                            name: "pace",
                            placeholder: "例如：每天 2 小时",
                            value: "{draft.pace}",
                            oninput: move |evt| form.write().pace = evt.value(),
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "生成画像" }
                }
            }

            match result() {
                ViewState::Idle => rsx! {},
                ViewState::Error(err) => {
                    let html = error_html(err.message());
                    rsx! {
                        div { class: "result", dangerous_inner_html: "{html}" }
                    }
                }
                ViewState::Ready(summary) => rsx! {
                    div { class: "result profile-result",
                        h3 { "🎉 用户画像创建成功！" }
                        p { strong { "画像ID：" } "{summary.id_label}" }
                        p { strong { "总结：" } span { dangerous_inner_html: "{summary.summary_html}" } }
                        for section in summary.sections {
                            p { strong { "{section.heading}" } }
                            ul {
                                for item in section.items_html {
                                    li { dangerous_inner_html: "{item}" }
                                }
                            }
                        }
                        div { class: "profile-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    show_form.set(true);
                                    result.set(ViewState::Idle);
                                },
                                "修改画像"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| {
                                    navigator.push(Route::Plan {});
                                },
                                "下一步：生成学习计划"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ProfileTestHandles {
    submit: std::rc::Rc<std::cell::RefCell<Option<Callback<()>>>>,
    form: std::rc::Rc<std::cell::RefCell<Option<Signal<ProfileDraft>>>>,
}

#[cfg(test)]
impl ProfileTestHandles {
    fn register(&self, submit: Callback<()>, form: Signal<ProfileDraft>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("profile submit registered")
    }

    pub(crate) fn form(&self) -> Signal<ProfileDraft> {
        (*self.form.borrow()).expect("profile form registered")
    }
}
