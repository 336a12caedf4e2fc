use crate::app::command::Command;
use crate::app::state::App;
use crate::domain::Page;
use color_eyre::Result;
use crossterm::event::KeyCode;

mod assignments;
mod course_detail;
mod courses;
mod dashboard;
mod help;
mod leaderboard;

pub async fn dispatch_input(app: &mut App, key: KeyCode) -> Result<()> {
    if help::handle_help_toggle(app, key) {
        return Ok(());
    }

    // The achievement popup captures its dismiss key wherever it appears.
    if app.achievement.is_some() && key == KeyCode::Char('d') {
        return app.apply(Command::DismissAchievement).await;
    }

    if let Some(command) = global_command(key) {
        return app.apply(command).await;
    }

    match app.page {
        Page::Dashboard => dashboard::handle_dashboard_input(app, key).await,
        Page::Courses => courses::handle_courses_input(app, key).await,
        Page::Assignments => assignments::handle_assignments_input(app, key).await,
        Page::Leaderboard => leaderboard::handle_leaderboard_input(app, key).await,
        Page::CourseDetail => course_detail::handle_course_detail_input(app, key).await,
    }
}

/// Keys that behave the same on every screen.
fn global_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('s') => Some(Command::ToggleSidebar),
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            Page::from_index(index).map(Command::Navigate)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_map_to_nav_pages() {
        assert_eq!(
            global_command(KeyCode::Char('1')),
            Some(Command::Navigate(Page::Dashboard))
        );
        assert_eq!(
            global_command(KeyCode::Char('4')),
            Some(Command::Navigate(Page::Leaderboard))
        );
        assert_eq!(global_command(KeyCode::Char('5')), None);
    }

    #[test]
    fn quit_and_sidebar_keys_are_global() {
        assert_eq!(global_command(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(
            global_command(KeyCode::Char('s')),
            Some(Command::ToggleSidebar)
        );
        assert_eq!(global_command(KeyCode::Esc), None);
    }

    #[tokio::test]
    async fn f1_toggles_the_help_overlay() -> Result<()> {
        let mut app = App::new();

        dispatch_input(&mut app, KeyCode::F(1)).await?;
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Esc).await?;
        assert!(!app.show_help);

        Ok(())
    }

    #[tokio::test]
    async fn dismiss_key_closes_the_achievement_anywhere() -> Result<()> {
        let mut app = App::new();
        app.show_achievement(crate::api::Achievement::first_login());

        dispatch_input(&mut app, KeyCode::Char('d')).await?;
        assert!(app.achievement.is_none());

        Ok(())
    }
}
