use crate::app::command::Command;
use crate::app::state::App;
use crate::domain::Page;
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_assignments_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc => return app.apply(Command::Navigate(Page::Dashboard)).await,
        KeyCode::Up => {
            if app.selected_task_index > 0 {
                app.selected_task_index -= 1;
            }
        }
        KeyCode::Down => {
            if !app.tasks.is_empty() && app.selected_task_index + 1 < app.tasks.len() {
                app.selected_task_index += 1;
            }
        }
        KeyCode::Home => {
            app.selected_task_index = 0;
        }
        KeyCode::End => {
            if !app.tasks.is_empty() {
                app.selected_task_index = app.tasks.len() - 1;
            }
        }
        _ => {}
    }

    Ok(())
}
