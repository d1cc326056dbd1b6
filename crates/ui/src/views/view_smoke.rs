use std::sync::Arc;

use dioxus::prelude::WritableExt;

use super::test_harness::{
    FailingStudyApi, ViewKind, profile_draft, setup_view_harness, setup_view_harness_with_api,
};

#[tokio::test(flavor = "current_thread")]
async fn home_without_session_only_offers_start() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("开始学习"), "missing start button in {html}");
    assert!(!html.contains("继续学习"), "unexpected continue button in {html}");
    assert!(!html.contains("最近的学习计划"), "unexpected recent plan in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_with_saved_session_shows_recent_plan() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.progress.create_profile(profile_draft()).await.unwrap();
    harness.progress.create_plan("线性代数").await.unwrap();

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("继续学习"), "missing continue in {html}");
    assert!(html.contains("总课程数：3"), "missing unit count in {html}");
    assert!(html.contains("当前进度：第1课"), "missing frontier in {html}");
    assert!(html.contains("重置进度"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_show_status_after_completion() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness.progress.create_plan("线性代数").await.unwrap();
    harness.progress.open_unit(0).await.unwrap();
    harness.progress.complete_unit(0).await.unwrap();

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("线性代数"), "missing topic in {html}");
    assert!(html.contains("course-item completed"), "missing completed unit in {html}");
    assert!(html.contains("course-item current"), "missing current unit in {html}");
    assert!(html.contains("course-item locked"), "missing locked unit in {html}");
    assert!(html.contains("预计时间：40分钟"), "missing minutes in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_without_plan_point_to_planning() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("还没有学习计划"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_renders_formatted_content() {
    let mut harness = setup_view_harness(ViewKind::Lesson);
    harness.progress.create_plan("线性代数").await.unwrap();
    harness.progress.open_unit(0).await.unwrap();

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("向量"), "missing title in {html}");
    assert!(html.contains("question-guide"), "missing guide block in {html}");
    assert!(html.contains("<strong>向量</strong>"), "missing bold in {html}");
    assert!(html.contains("完成本课"), "missing complete button in {html}");
    assert!(!html.contains("下一课"), "next lesson should be locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_offers_next_once_unlocked() {
    let mut harness = setup_view_harness(ViewKind::Lesson);
    harness.progress.create_plan("线性代数").await.unwrap();
    harness.progress.open_unit(0).await.unwrap();
    harness.progress.complete_unit(0).await.unwrap();

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("下一课"), "missing next lesson in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_without_open_unit_asks_to_pick_one() {
    let mut harness = setup_view_harness(ViewKind::Lesson);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("请先在课程列表中选择一节课"), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn plan_form_prefills_direction() {
    let mut harness = setup_view_harness(ViewKind::Plan);
    harness.progress.create_profile(profile_draft()).await.unwrap();

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("线性代数"), "missing prefilled topic in {html}");
    assert!(html.contains("预览知识网"), "missing preview button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_form_has_every_field() {
    let mut harness = setup_view_harness(ViewKind::Profile);
    harness.rebuild();
    let html = harness.render();
    for field in ["stage", "direction", "plan", "goal", "pace"] {
        assert!(html.contains(&format!("name=\"{field}\"")), "missing {field} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_form_offers_five_ratings() {
    let mut harness = setup_view_harness(ViewKind::Feedback);
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("<option").count(), 10, "{html}");
    assert!(html.contains("提交反馈"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_through_service_empties_home() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.progress.create_profile(profile_draft()).await.unwrap();
    harness.progress.create_plan("线性代数").await.unwrap();
    harness.progress.reset().await.unwrap();

    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("继续学习"), "unexpected continue in {html}");
    assert!(
        harness
            .storage
            .sessions
            .get_raw("study_agent_plan")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_navigation_around_home() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    let html = harness.render();
    for label in ["首页", "用户画像", "学习计划", "课程列表", "反馈"] {
        assert!(html.contains(label), "missing nav entry {label} in {html}");
    }
    assert!(html.contains("开始学习"), "missing home content in {html}");
    assert!(!html.contains("loading-overlay"), "overlay should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_server_error_is_shown_inline_and_nothing_is_stored() {
    let mut harness = setup_view_harness_with_api(ViewKind::Profile, Arc::new(FailingStudyApi));
    harness.rebuild();

    let handles = harness.profile_handles.clone();
    harness.dom.in_runtime(|| {
        handles.form().set(profile_draft());
        handles.submit().call(());
    });
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("❌ 错误：HTTP error! status: 500"),
        "missing inline error in {html}"
    );
    assert!(html.contains("name=\"stage\""), "form should stay visible in {html}");
    assert!(harness.progress.snapshot().profile().is_none());
    assert!(
        harness
            .storage
            .sessions
            .get_raw("study_agent_profile")
            .await
            .unwrap()
            .is_none()
    );
}
