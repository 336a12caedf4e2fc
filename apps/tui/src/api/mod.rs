// Simulated backend for the dashboard. Everything is served from bundled
// fixtures with artificial latencies so the app runs fully offline; a real
// client would implement the same functions against API_BASE_URL.

pub mod fixtures;
pub mod models;

pub use fixtures::{
    load_activities, load_clubs, load_course_detail, load_courses, load_leaderboard,
    load_pending_tasks, load_user, roadmap_for, skills_catalog,
};
pub use models::{
    format_due_date, Achievement, Activity, Club, CourseDetail, CourseSummary, CurrentUserRank,
    LeaderboardEntry, LeaderboardSnapshot, PendingTask, RoadmapStep, Skill, UserProfile,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("course {0} not found")]
    CourseNotFound(i32),
}
