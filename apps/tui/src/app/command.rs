use crate::domain::{LeaderboardPeriod, Page};

/// Every user-facing operation. Input handlers translate key presses into
/// commands; `App::apply` is the single place they change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Page),
    OpenCourse(i32),
    OpenClub(i32),
    OpenActivity(i32),
    ToggleRoadmap(i32),
    SwitchPeriod(LeaderboardPeriod),
    ToggleSidebar,
    DismissAchievement,
    Quit,
}
