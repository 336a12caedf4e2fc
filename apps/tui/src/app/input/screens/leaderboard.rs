use crate::app::command::Command;
use crate::app::state::App;
use crate::domain::Page;
use color_eyre::Result;
use crossterm::event::KeyCode;

pub async fn handle_leaderboard_input(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        // Two tabs, so either arrow lands on the other one.
        KeyCode::Left | KeyCode::Right => {
            let period = app.leaderboard_period.toggled();
            app.apply(Command::SwitchPeriod(period)).await
        }
        KeyCode::Esc => app.apply(Command::Navigate(Page::Dashboard)).await,
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeaderboardPeriod;

    #[tokio::test]
    async fn arrows_switch_between_the_two_periods() -> Result<()> {
        let mut app = App::new();
        app.page = Page::Leaderboard;

        handle_leaderboard_input(&mut app, KeyCode::Right).await?;
        assert_eq!(app.leaderboard_period, LeaderboardPeriod::Monthly);

        handle_leaderboard_input(&mut app, KeyCode::Left).await?;
        assert_eq!(app.leaderboard_period, LeaderboardPeriod::Weekly);

        Ok(())
    }
}
