use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{CourseItemVm, map_course_list};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    ui.track();
    let list = map_course_list(&progress.snapshot());

    let on_open = use_callback(move |index: usize| {
        let progress = progress.clone();
        ui.run(async move {
            match progress.open_unit(index).await {
                Ok(_) => {
                    navigator.push(Route::Lesson {});
                }
                Err(err) => {
                    ui.show_alert(format!("加载课程失败：{}", ViewError::from(err).message()));
                }
            }
        });
    });

    let Some(list) = list else {
        return rsx! {
            div { class: "page courses-page",
                h2 { "课程列表" }
                p { "还没有学习计划。" }
                Link { class: "btn btn-primary", to: Route::Plan {}, "去生成学习计划" }
            }
        };
    };

    rsx! {
        div { class: "page courses-page",
            h2 { "{list.topic}" }
            p { class: "plan-summary", "{list.summary}" }
            p { class: "plan-progress", "{list.progress_label}" }
            div { class: "course-list",
                for item in list.items {
                    CourseItem { key: "{item.index}", item, on_open }
                }
            }
        }
    }
}

#[component]
fn CourseItem(item: CourseItemVm, on_open: Callback<usize>) -> Element {
    let index = item.index;
    let clickable = item.clickable;
    rsx! {
        div {
            class: "course-item {item.badge.class}",
            onclick: move |_| {
                if clickable {
                    on_open.call(index);
                }
            },
            h3 { "{item.title}" }
            p { "{item.minutes_label}" }
            div { class: "course-item-status",
                span { class: "status-icon", "{item.badge.icon}" }
                span { class: "status-text {item.badge.class}", "{item.badge.text}" }
            }
        }
    }
}
