use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::{UiState, use_ui_state_provider};
use crate::views::{CoursesView, FeedbackView, HomeView, LessonView, PlanView, ProfileView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/profile", ProfileView)] Profile {},
        #[route("/plan", PlanView)] Plan {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/lesson", LessonView)] Lesson {},
        #[route("/feedback", FeedbackView)] Feedback {},
}

#[component]
fn Layout() -> Element {
    use_ui_state_provider();

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            LoadingOverlay {}
            AlertModal {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "学习助手" }
            ul {
                li { Link { to: Route::Home {}, "首页" } }
                li { Link { to: Route::Profile {}, "用户画像" } }
                li { Link { to: Route::Plan {}, "学习计划" } }
                li { Link { to: Route::Courses {}, "课程列表" } }
                li { Link { to: Route::Feedback {}, "反馈" } }
            }
        }
    }
}

#[component]
pub fn LoadingOverlay() -> Element {
    let ui = use_context::<UiState>();
    if !(ui.busy)() {
        return rsx! {};
    }
    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner" }
            p { "加载中..." }
        }
    }
}

#[component]
pub fn AlertModal() -> Element {
    let ui = use_context::<UiState>();
    let Some(message) = (ui.alert)() else {
        return rsx! {};
    };
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "alertdialog",
                p { class: "modal-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| ui.dismiss_alert(),
                    "确定"
                }
            }
        }
    }
}
