// UI module for sagalearn-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use crate::domain::Page;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.page {
        Page::Dashboard => screens::dashboard::render_dashboard(app, f),
        Page::Courses => screens::courses::render_courses(app, f),
        Page::Assignments => screens::assignments::render_assignments(app, f),
        Page::Leaderboard => screens::leaderboard::render_leaderboard(app, f),
        Page::CourseDetail => screens::course_detail::render_course_detail(app, f),
    }

    // Overlays sit on top of whichever screen is current.
    if app.show_help {
        widgets::overlay::render_help(f);
    }

    if let Some(popup) = &app.achievement {
        widgets::overlay::render_achievement(popup, f);
    }

    if let Some(toast) = &app.toast {
        widgets::overlay::render_toast(toast, f);
    }
}
