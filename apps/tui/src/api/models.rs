use crate::domain::TaskKind;
use serde::Serialize;

/// The signed-in student shown in the header and on the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub xp: u32,
    pub level: u32,
    pub streak_days: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: i32,
    pub name: String,
    pub instructor: String,
    pub progress: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub next_event: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub next_event: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub kind: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub department: String,
    pub points: u32,
    /// Signed point change such as "+50"; rendered with its sign.
    pub change: String,
}

/// The signed-in student's own standing, appended to the table only when
/// they are not already in the visible top rows.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserRank {
    pub rank: u32,
    pub name: String,
    pub department: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardSnapshot {
    pub weekly: Vec<LeaderboardEntry>,
    pub monthly: Vec<LeaderboardEntry>,
    pub current_user: CurrentUserRank,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingTask {
    pub id: i32,
    pub title: String,
    pub kind: TaskKind,
    pub course: String,
    pub due_date: String,
    pub urgent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    pub id: i32,
    pub name: String,
    pub instructor: String,
    pub description: String,
    pub progress: u8,
    pub modules: u32,
    pub completed_modules: u32,
}

const ACHIEVEMENT_DEFAULT_XP: u32 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub xp: u32,
}

impl Achievement {
    pub fn new(icon: &str, name: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            xp: ACHIEVEMENT_DEFAULT_XP,
        }
    }

    pub const fn with_xp(mut self, xp: u32) -> Self {
        self.xp = xp;
        self
    }

    /// The demo achievement surfaced shortly after launch.
    pub fn first_login() -> Self {
        Self::new("🎯", "First Login", "Welcome to your learning journey!").with_xp(50)
    }
}

/// Formats an ISO due date ("2024-01-15") as a short label ("Jan 15").
/// Unparseable input is shown as-is.
pub fn format_due_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%b %-d").to_string())
}
