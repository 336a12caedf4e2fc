#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Courses,
    Assignments,
    Leaderboard,
    CourseDetail,
}

impl Page {
    /// Pages reachable from the sidebar, in nav order.
    pub const NAV: [Self; 4] = [
        Self::Dashboard,
        Self::Courses,
        Self::Assignments,
        Self::Leaderboard,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Courses => "courses",
            Self::Assignments => "assignments",
            Self::Leaderboard => "leaderboard",
            Self::CourseDetail => "course-detail",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Dashboard),
            1 => Some(Self::Courses),
            2 => Some(Self::Assignments),
            3 => Some(Self::Leaderboard),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dashboard" => Some(Self::Dashboard),
            "courses" => Some(Self::Courses),
            "assignments" => Some(Self::Assignments),
            "leaderboard" => Some(Self::Leaderboard),
            "course-detail" => Some(Self::CourseDetail),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Courses => "My Courses",
            Self::Assignments => "Assignments",
            Self::Leaderboard => "Leaderboard",
            Self::CourseDetail => "Course Detail",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "⌂",
            Self::Courses => "▤",
            Self::Assignments => "✎",
            Self::Leaderboard => "♛",
            Self::CourseDetail => "▸",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardPeriod {
    #[default]
    Weekly,
    Monthly,
}

impl LeaderboardPeriod {
    pub const ALL: [Self; 2] = [Self::Weekly, Self::Monthly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Weekly),
            1 => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Weekly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Quiz,
    Assignment,
}

impl TaskKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Assignment => "assignment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiz" => Some(Self::Quiz),
            "assignment" => Some(Self::Assignment),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Assignment => "Assignment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LeaderboardPeriod, Page, TaskKind, ToastKind};

    #[test]
    fn leaderboard_period_rejects_unknown_values() {
        assert_eq!(
            LeaderboardPeriod::parse("weekly"),
            Some(LeaderboardPeriod::Weekly)
        );
        assert_eq!(
            LeaderboardPeriod::parse(" Monthly "),
            Some(LeaderboardPeriod::Monthly)
        );
        assert_eq!(LeaderboardPeriod::parse("yearly"), None);
        assert_eq!(LeaderboardPeriod::parse(""), None);
    }

    #[test]
    fn leaderboard_period_toggles_between_both_tabs() {
        assert_eq!(
            LeaderboardPeriod::Weekly.toggled(),
            LeaderboardPeriod::Monthly
        );
        assert_eq!(
            LeaderboardPeriod::Monthly.toggled(),
            LeaderboardPeriod::Weekly
        );
    }

    #[test]
    fn nav_pages_map_to_number_keys() {
        for (index, page) in Page::NAV.iter().enumerate() {
            assert_eq!(Page::from_index(index), Some(*page));
        }
        assert_eq!(Page::from_index(4), None);
    }

    #[test]
    fn toast_kind_defaults_to_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::parse("fatal"), None);
    }

    #[test]
    fn task_kind_parses_fixture_values() {
        assert_eq!(TaskKind::parse("quiz"), Some(TaskKind::Quiz));
        assert_eq!(TaskKind::parse("assignment"), Some(TaskKind::Assignment));
        assert_eq!(TaskKind::parse("exam"), None);
    }
}
