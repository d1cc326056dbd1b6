use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_recent_plan;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    ui.track();
    let recent = map_recent_plan(&progress.snapshot());
    let has_saved = recent.is_some();

    let on_reset = use_callback(move |()| {
        let progress = progress.clone();
        ui.run(async move {
            if let Err(err) = progress.reset().await {
                ui.show_alert(ViewError::from(err).message());
            }
        });
    });

    rsx! {
        div { class: "page home-page",
            h2 { "AI 学习助手" }
            p { class: "home-intro", "填写画像，生成专属学习计划，按课程循序渐进地学习。" }

            div { class: "home-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Profile {});
                    },
                    "开始学习"
                }
                if has_saved {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            navigator.push(Route::Courses {});
                        },
                        "继续学习"
                    }
                }
            }

            if let Some(recent) = recent {
                section { class: "recent-plan",
                    h3 { "最近的学习计划" }
                    div { class: "recent-plan-item",
                        h4 { "{recent.topic}" }
                        p { "{recent.unit_count_label}" }
                        p { "{recent.completed_label}" }
                        p { "{recent.current_label}" }
                        Link { class: "btn btn-sm btn-primary", to: Route::Courses {}, "查看详情" }
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_reset.call(()),
                        "重置进度"
                    }
                }
            }
        }
    }
}
