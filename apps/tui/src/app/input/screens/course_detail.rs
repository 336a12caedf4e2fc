use crate::app::command::Command;
use crate::app::state::App;
use crate::domain::Page;
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_course_detail_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc | KeyCode::Backspace => app.apply(Command::Navigate(Page::Courses)).await,
        _ => Ok(()),
    }
}
