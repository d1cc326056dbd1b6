use study_core::LearningSession;
use study_core::model::UnitStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub class: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
}

#[must_use]
pub fn status_badge(status: UnitStatus) -> StatusBadge {
    match status {
        UnitStatus::Completed => StatusBadge {
            class: "completed",
            icon: "✅",
            text: "已完成",
        },
        UnitStatus::Current => StatusBadge {
            class: "current",
            icon: "▶️",
            text: "进行中",
        },
        UnitStatus::Locked => StatusBadge {
            class: "locked",
            icon: "🔒",
            text: "未解锁",
        },
        UnitStatus::Reviewable => StatusBadge {
            class: "",
            icon: "📄",
            text: "可复习",
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseItemVm {
    pub index: usize,
    pub title: String,
    pub minutes_label: String,
    pub badge: StatusBadge,
    pub clickable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseListVm {
    pub topic: String,
    pub summary: String,
    pub items: Vec<CourseItemVm>,
    pub progress_label: String,
}

/// Course list for the current plan, or `None` before a plan exists.
#[must_use]
pub fn map_course_list(session: &LearningSession) -> Option<CourseListVm> {
    let plan = session.plan()?;
    let statuses = session.unit_statuses();

    let items = plan
        .units
        .iter()
        .zip(statuses)
        .enumerate()
        .map(|(index, (unit, status))| CourseItemVm {
            index,
            title: unit.title.clone(),
            minutes_label: format!("预计时间：{}分钟", unit.estimated_time_minutes),
            badge: status_badge(status),
            clickable: !status.is_locked(),
        })
        .collect();

    Some(CourseListVm {
        topic: plan.topic.clone(),
        summary: plan.summary.clone(),
        items,
        progress_label: format!(
            "已完成 {}/{} 课 · 共约 {} 分钟",
            session.completed().len(),
            plan.units.len(),
            plan.total_minutes()
        ),
    })
}

/// Summary card shown on the home page when a session can be continued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentPlanVm {
    pub topic: String,
    pub unit_count_label: String,
    pub completed_label: String,
    pub current_label: String,
}

#[must_use]
pub fn map_recent_plan(session: &LearningSession) -> Option<RecentPlanVm> {
    if !session.has_saved_session() {
        return None;
    }
    let plan = session.plan()?;
    Some(RecentPlanVm {
        topic: plan.topic.clone(),
        unit_count_label: format!("总课程数：{}", plan.units.len()),
        completed_label: format!("已完成：{}", session.completed().len()),
        current_label: format!("当前进度：第{}课", session.frontier() + 1),
    })
}
