use crate::app::state::App;
use crossterm::event::KeyCode;

/// Returns true when the key was consumed by the help overlay. While help
/// is visible it swallows everything except its own close keys, so nothing
/// underneath reacts.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::F(1) => {
            app.show_help = !app.show_help;
            true
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            true
        }
        _ => app.show_help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_swallows_other_keys_while_visible() {
        let mut app = App::new();

        assert!(handle_help_toggle(&mut app, KeyCode::F(1)));
        assert!(app.show_help);

        assert!(handle_help_toggle(&mut app, KeyCode::Char('q')));
        assert!(app.show_help);

        assert!(handle_help_toggle(&mut app, KeyCode::Esc));
        assert!(!app.show_help);

        assert!(!handle_help_toggle(&mut app, KeyCode::Char('q')));
    }
}
