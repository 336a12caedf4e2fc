use crate::app::command::Command;
use crate::app::state::App;
use crate::domain::Page;
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_courses_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc => return app.apply(Command::Navigate(Page::Dashboard)).await,
        KeyCode::Up => {
            if app.selected_course_index > 0 {
                app.selected_course_index -= 1;
            }
        }
        KeyCode::Down => {
            if !app.courses.is_empty() && app.selected_course_index + 1 < app.courses.len() {
                app.selected_course_index += 1;
            }
        }
        KeyCode::Home => {
            app.selected_course_index = 0;
        }
        KeyCode::End => {
            if !app.courses.is_empty() {
                app.selected_course_index = app.courses.len() - 1;
            }
        }
        KeyCode::Enter => {
            if let Some(course) = app.selected_course() {
                let id = course.id;
                return app.apply(Command::OpenCourse(id)).await;
            }
        }
        KeyCode::Char('r') => {
            if let Some(course) = app.selected_course() {
                let id = course.id;
                return app.apply(Command::ToggleRoadmap(id)).await;
            }
        }
        _ => {}
    }

    Ok(())
}
