mod helpers;
pub mod screens;

use crate::app::state::App;
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_input(app: &mut App, key: KeyCode) -> Result<()> {
    screens::dispatch_input(app, key).await
}
