use std::time::Instant;

use crate::api::{
    self, Achievement, Activity, ApiError, Club, CourseDetail, CourseSummary, LeaderboardSnapshot,
    PendingTask, Skill, UserProfile,
};
use crate::app::actions::AppActions;
use crate::app::command::Command;
use crate::app::notify::{AchievementPopup, Toast};
use crate::domain::{LeaderboardPeriod, Page, ToastKind};
use color_eyre::Result;

/// Focusable panels on the dashboard, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Courses,
    Tasks,
    Clubs,
    Activities,
}

impl DashboardPanel {
    pub const fn next(self) -> Self {
        match self {
            Self::Courses => Self::Tasks,
            Self::Tasks => Self::Clubs,
            Self::Clubs => Self::Activities,
            Self::Activities => Self::Courses,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Courses => Self::Activities,
            Self::Tasks => Self::Courses,
            Self::Clubs => Self::Tasks,
            Self::Activities => Self::Clubs,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Courses => "My Courses",
            Self::Tasks => "Pending Tasks",
            Self::Clubs => "Clubs",
            Self::Activities => "Activities",
        }
    }
}

/// What the course-detail screen is currently showing.
#[derive(Debug, Clone)]
pub enum CourseDetailView {
    Loading,
    Loaded(CourseDetail),
    NotFound(i32),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub page: Page,
    pub actions: AppActions,
    pub user: Option<UserProfile>,
    pub courses: Vec<CourseSummary>,
    pub clubs: Vec<Club>,
    pub activities: Vec<Activity>,
    pub skills: Vec<Skill>,
    pub leaderboard: Option<LeaderboardSnapshot>,
    pub tasks: Vec<PendingTask>,
    pub leaderboard_period: LeaderboardPeriod,
    /// At most one course roadmap is expanded at a time.
    pub expanded_course: Option<i32>,
    pub sidebar_collapsed: bool,
    pub course_detail: Option<CourseDetailView>,
    pub loading: bool,
    pub initial_load_done: bool,
    pub toast: Option<Toast>,
    pub achievement: Option<AchievementPopup>,
    pub active_panel: DashboardPanel,
    pub selected_course_index: usize,
    pub selected_task_index: usize,
    pub selected_club_index: usize,
    pub selected_activity_index: usize,
    pub show_help: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            page: Page::Dashboard,
            actions: AppActions::new(),
            user: None,
            courses: Vec::new(),
            clubs: Vec::new(),
            activities: Vec::new(),
            skills: api::skills_catalog(),
            leaderboard: None,
            tasks: Vec::new(),
            leaderboard_period: LeaderboardPeriod::Weekly,
            expanded_course: None,
            sidebar_collapsed: false,
            course_detail: None,
            loading: false,
            initial_load_done: false,
            toast: None,
            achievement: None,
            active_panel: DashboardPanel::Courses,
            selected_course_index: 0,
            selected_task_index: 0,
            selected_club_index: 0,
            selected_activity_index: 0,
            show_help: false,
        }
    }

    /// Connects the settings store and restores persisted preferences.
    pub async fn initialize(&mut self) -> Result<()> {
        self.actions.initialize().await?;

        tracing::info!(
            "backend configured at {} (serving fixtures)",
            self.actions.api_base_url
        );

        match self.actions.sidebar_collapsed().await {
            Ok(collapsed) => self.sidebar_collapsed = collapsed,
            Err(e) => tracing::warn!("failed to restore sidebar preference: {e}"),
        }

        Ok(())
    }

    /// Per-frame maintenance: drops overlays whose deadline has passed.
    pub fn update(&mut self) {
        self.expire_overlays(Instant::now());
    }

    pub fn expire_overlays(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
        if self
            .achievement
            .as_ref()
            .is_some_and(|popup| popup.is_expired(now))
        {
            self.achievement = None;
        }
    }

    /// Shows a toast, replacing any visible one along with its deadline.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind, Instant::now()));
    }

    pub fn show_achievement(&mut self, achievement: Achievement) {
        self.achievement = Some(AchievementPopup::new(achievement, Instant::now()));
    }

    /// Loads every dashboard snapshot concurrently. The panels render their
    /// previous (or empty) state until all loads resolve; a failure keeps
    /// that state and surfaces an error toast instead.
    pub async fn reload_dashboard(&mut self) {
        self.loading = true;

        if let Err(e) = self.fetch_dashboard().await {
            tracing::warn!("dashboard load failed: {e}");
            self.show_toast("Error loading dashboard data", ToastKind::Error);
        }

        self.loading = false;
        self.initial_load_done = true;
    }

    /// The periodic refresh. A failed cycle is logged and otherwise ignored
    /// so the visible state never changes because of it.
    pub async fn refresh_in_background(&mut self) {
        if let Err(e) = self.fetch_dashboard().await {
            tracing::warn!("periodic refresh failed: {e}");
        }
    }

    async fn fetch_dashboard(&mut self) -> Result<(), ApiError> {
        let user = api::load_user().await?;

        let (courses, clubs, activities, leaderboard, tasks) = tokio::join!(
            api::load_courses(),
            api::load_clubs(),
            api::load_activities(),
            api::load_leaderboard(),
            api::load_pending_tasks(),
        );

        let courses = courses?;
        let clubs = clubs?;
        let activities = activities?;
        let leaderboard = leaderboard?;
        let tasks = tasks?;

        self.user = Some(user);
        self.courses = courses;
        self.clubs = clubs;
        self.activities = activities;
        self.leaderboard = Some(leaderboard);
        self.tasks = tasks;
        self.clamp_selections();

        Ok(())
    }

    /// Applies one user command. The only place state transitions happen.
    pub async fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Navigate(page) => {
                self.page = page;
                self.course_detail = None;
                self.reload_page_data(page).await;
            }
            Command::OpenCourse(course_id) => {
                self.page = Page::CourseDetail;
                self.course_detail = Some(CourseDetailView::Loading);
                let view = match api::load_course_detail(course_id).await {
                    Ok(detail) => CourseDetailView::Loaded(detail),
                    Err(ApiError::CourseNotFound(id)) => CourseDetailView::NotFound(id),
                };
                self.course_detail = Some(view);
            }
            Command::OpenClub(club_id) => {
                if let Some(club) = self.clubs.iter().find(|club| club.id == club_id) {
                    let message = format!("{}: next event {}", club.name, club.next_event);
                    self.show_toast(message, ToastKind::Info);
                }
            }
            Command::OpenActivity(activity_id) => {
                if let Some(activity) = self
                    .activities
                    .iter()
                    .find(|activity| activity.id == activity_id)
                {
                    let message = format!("{}: {}", activity.name, activity.next_event);
                    self.show_toast(message, ToastKind::Info);
                }
            }
            Command::ToggleRoadmap(course_id) => self.toggle_roadmap(course_id),
            Command::SwitchPeriod(period) => {
                self.leaderboard_period = period;
                self.reload_page_data(Page::Leaderboard).await;
            }
            Command::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                self.actions
                    .persist_sidebar_collapsed(self.sidebar_collapsed)
                    .await?;
            }
            Command::DismissAchievement => self.achievement = None,
            Command::Quit => self.running = false,
        }

        Ok(())
    }

    /// Expands a course roadmap, collapsing any other. Toggling the already
    /// expanded course collapses it; ids not in the loaded list are ignored.
    pub fn toggle_roadmap(&mut self, course_id: i32) {
        if !self.courses.iter().any(|course| course.id == course_id) {
            return;
        }

        self.expanded_course = if self.expanded_course == Some(course_id) {
            None
        } else {
            Some(course_id)
        };
    }

    pub fn selected_course(&self) -> Option<&CourseSummary> {
        self.courses.get(self.selected_course_index)
    }

    async fn reload_page_data(&mut self, page: Page) {
        let result = match page {
            Page::Courses => {
                tracing::debug!("loading courses page data");
                api::load_courses().await.map(|courses| {
                    self.courses = courses;
                })
            }
            Page::Assignments => {
                tracing::debug!("loading assignments page data");
                api::load_pending_tasks().await.map(|tasks| {
                    self.tasks = tasks;
                })
            }
            Page::Leaderboard => {
                tracing::debug!("loading leaderboard page data");
                api::load_leaderboard().await.map(|snapshot| {
                    self.leaderboard = Some(snapshot);
                })
            }
            Page::Dashboard | Page::CourseDetail => Ok(()),
        };

        match result {
            Ok(()) => self.clamp_selections(),
            Err(e) => {
                tracing::warn!("page data load failed: {e}");
                self.show_toast("Error loading page data", ToastKind::Error);
            }
        }
    }

    /// Keeps cursor positions and the expanded roadmap valid after a reload
    /// replaces the snapshots.
    fn clamp_selections(&mut self) {
        if self.courses.is_empty() {
            self.selected_course_index = 0;
        } else if self.selected_course_index >= self.courses.len() {
            self.selected_course_index = self.courses.len() - 1;
        }

        if self.tasks.is_empty() {
            self.selected_task_index = 0;
        } else if self.selected_task_index >= self.tasks.len() {
            self.selected_task_index = self.tasks.len() - 1;
        }

        if self.clubs.is_empty() {
            self.selected_club_index = 0;
        } else if self.selected_club_index >= self.clubs.len() {
            self.selected_club_index = self.clubs.len() - 1;
        }

        if self.activities.is_empty() {
            self.selected_activity_index = 0;
        } else if self.selected_activity_index >= self.activities.len() {
            self.selected_activity_index = self.activities.len() - 1;
        }

        if let Some(id) = self.expanded_course {
            if !self.courses.iter().any(|course| course.id == id) {
                self.expanded_course = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn course(id: i32, name: &str) -> CourseSummary {
        CourseSummary {
            id,
            name: name.to_string(),
            instructor: "Dr. Smith".to_string(),
            progress: 40,
            category: "Monthly".to_string(),
        }
    }

    fn app_with_courses() -> App {
        let mut app = App::new();
        app.courses = vec![course(1, "Data Structures"), course(2, "Web Development")];
        app
    }

    #[tokio::test]
    async fn navigating_switches_the_single_current_page() -> Result<()> {
        let mut app = App::new();

        for page in Page::NAV {
            app.apply(Command::Navigate(page)).await?;
            assert_eq!(app.page, page);
        }

        Ok(())
    }

    #[test]
    fn roadmap_toggle_collapses_on_repeat() {
        let mut app = app_with_courses();

        app.toggle_roadmap(1);
        assert_eq!(app.expanded_course, Some(1));

        app.toggle_roadmap(1);
        assert_eq!(app.expanded_course, None);
    }

    #[test]
    fn at_most_one_roadmap_is_expanded() {
        let mut app = app_with_courses();

        app.toggle_roadmap(1);
        app.toggle_roadmap(2);
        assert_eq!(app.expanded_course, Some(2));
    }

    #[test]
    fn unknown_roadmap_ids_are_ignored() {
        let mut app = app_with_courses();

        app.toggle_roadmap(99);
        assert_eq!(app.expanded_course, None);

        app.toggle_roadmap(1);
        app.toggle_roadmap(99);
        assert_eq!(app.expanded_course, Some(1));
    }

    #[test]
    fn a_second_toast_replaces_the_first() {
        let mut app = App::new();

        app.show_toast("first", ToastKind::Info);
        app.show_toast("second", ToastKind::Warning);

        let toast = app.toast.as_ref().map(|t| (t.message.clone(), t.kind));
        assert_eq!(toast, Some(("second".to_string(), ToastKind::Warning)));
    }

    #[test]
    fn expired_toasts_are_dropped_on_update() {
        let mut app = App::new();
        app.show_toast("Saved", ToastKind::Success);

        let now = Instant::now();
        app.expire_overlays(now);
        assert!(app.toast.is_some());

        app.expire_overlays(now + Duration::from_millis(3100));
        assert!(app.toast.is_none());
    }

    #[tokio::test]
    async fn dismissing_the_achievement_is_idempotent() -> Result<()> {
        let mut app = App::new();
        app.show_achievement(Achievement::first_login());

        app.apply(Command::DismissAchievement).await?;
        assert!(app.achievement.is_none());

        app.apply(Command::DismissAchievement).await?;
        assert!(app.achievement.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn switching_periods_refetches_the_snapshot() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::SwitchPeriod(LeaderboardPeriod::Monthly))
            .await?;
        assert_eq!(app.leaderboard_period, LeaderboardPeriod::Monthly);
        assert!(app.leaderboard.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn opening_an_unknown_course_shows_not_found() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::OpenCourse(42)).await?;
        assert_eq!(app.page, Page::CourseDetail);
        assert!(matches!(
            app.course_detail,
            Some(CourseDetailView::NotFound(42))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn opening_a_known_course_loads_its_detail() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::OpenCourse(2)).await?;
        match &app.course_detail {
            Some(CourseDetailView::Loaded(detail)) => {
                assert_eq!(detail.name, "Web Development");
            }
            other => panic!("expected loaded detail, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn navigating_away_resets_the_detail_view() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::OpenCourse(1)).await?;
        app.apply(Command::Navigate(Page::Courses)).await?;

        assert_eq!(app.page, Page::Courses);
        assert!(app.course_detail.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn sidebar_toggle_flips_without_a_store() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::ToggleSidebar).await?;
        assert!(app.sidebar_collapsed);

        app.apply(Command::ToggleSidebar).await?;
        assert!(!app.sidebar_collapsed);

        Ok(())
    }

    #[tokio::test]
    async fn quit_stops_the_app() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::Quit).await?;
        assert!(!app.running);

        Ok(())
    }

    #[tokio::test]
    async fn reload_populates_every_dashboard_snapshot() {
        let mut app = App::new();

        app.reload_dashboard().await;

        assert!(app.user.is_some());
        assert_eq!(app.courses.len(), 3);
        assert_eq!(app.clubs.len(), 3);
        assert_eq!(app.activities.len(), 3);
        assert!(app.leaderboard.is_some());
        assert_eq!(app.tasks.len(), 3);
        assert!(!app.loading);
        assert!(app.initial_load_done);
    }

    #[test]
    fn reload_collapses_roadmaps_of_removed_courses() {
        let mut app = app_with_courses();
        app.toggle_roadmap(2);

        app.courses = vec![course(1, "Data Structures")];
        app.clamp_selections();

        assert_eq!(app.expanded_course, None);
    }

    #[tokio::test]
    async fn opening_a_club_surfaces_an_info_toast() -> Result<()> {
        let mut app = App::new();
        app.reload_dashboard().await;

        let club_id = app.clubs[0].id;
        app.apply(Command::OpenClub(club_id)).await?;

        let toast = app.toast.as_ref().map(|t| t.kind);
        assert_eq!(toast, Some(ToastKind::Info));

        Ok(())
    }

    #[tokio::test]
    async fn opening_an_unknown_club_is_ignored() -> Result<()> {
        let mut app = App::new();

        app.apply(Command::OpenClub(99)).await?;
        assert!(app.toast.is_none());

        Ok(())
    }

    #[test]
    fn panel_cycle_visits_every_panel_and_wraps() {
        let mut panel = DashboardPanel::Courses;
        for _ in 0..4 {
            panel = panel.next();
        }
        assert_eq!(panel, DashboardPanel::Courses);

        assert_eq!(DashboardPanel::Courses.prev(), DashboardPanel::Activities);
    }
}
