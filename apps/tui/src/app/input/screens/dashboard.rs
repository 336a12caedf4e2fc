use crate::app::command::Command;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, DashboardPanel};
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_dashboard_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
        }
        KeyCode::Up => move_selection(app, true),
        KeyCode::Down => move_selection(app, false),
        KeyCode::Enter => {
            if let Some(command) = open_command(app) {
                return app.apply(command).await;
            }
        }
        KeyCode::Char('r') => {
            if app.active_panel == DashboardPanel::Courses {
                if let Some(course) = app.selected_course() {
                    let id = course.id;
                    return app.apply(Command::ToggleRoadmap(id)).await;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// What Enter does for the focused panel. Tasks have no detail view.
fn open_command(app: &App) -> Option<Command> {
    match app.active_panel {
        DashboardPanel::Courses => app.selected_course().map(|course| Command::OpenCourse(course.id)),
        DashboardPanel::Tasks => None,
        DashboardPanel::Clubs => app
            .clubs
            .get(app.selected_club_index)
            .map(|club| Command::OpenClub(club.id)),
        DashboardPanel::Activities => app
            .activities
            .get(app.selected_activity_index)
            .map(|activity| Command::OpenActivity(activity.id)),
    }
}

/// Moves the cursor of whichever panel has focus.
fn move_selection(app: &mut App, up: bool) {
    let step: fn(usize, usize) -> usize = if up { wrap_decrement } else { wrap_increment };
    match app.active_panel {
        DashboardPanel::Courses => {
            app.selected_course_index = step(app.selected_course_index, app.courses.len());
        }
        DashboardPanel::Tasks => {
            app.selected_task_index = step(app.selected_task_index, app.tasks.len());
        }
        DashboardPanel::Clubs => {
            app.selected_club_index = step(app.selected_club_index, app.clubs.len());
        }
        DashboardPanel::Activities => {
            app.selected_activity_index = step(app.selected_activity_index, app.activities.len());
        }
    }
}
