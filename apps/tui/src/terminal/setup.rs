use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

/// Puts the terminal into raw mode on the alternate screen. Steps that
/// modify terminal state are unwound on failure so a half-initialized
/// terminal is never left behind.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    eprintln!("Setting up terminal ({width}x{height})...");

    enable_raw_mode().map_err(|e| eyre!("Failed to enable raw mode: {e}"))?;

    let mut out = stdout();
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(eyre!("Failed to enter alternate screen: {e}"));
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(out)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(eyre!("Failed to create terminal: {e}"));
        }
    };

    // Neither of these is fatal; the first frame clears anyway.
    if let Err(e) = terminal.clear() {
        eprintln!("Warning: failed to clear terminal: {e}");
    }
    if let Err(e) = execute!(stdout(), cursor::Hide) {
        eprintln!("Warning: failed to hide cursor: {e}");
    }

    eprintln!("Terminal ready");
    Ok(terminal)
}

/// Restores the terminal. Every step runs even when earlier ones fail, so
/// the shell is left as usable as possible.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if let Err(e) = execute!(out, cursor::Show) {
        eprintln!("Warning: failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(out, LeaveAlternateScreen) {
            eprintln!("Warning: failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            eprintln!("Warning: failed to disable raw mode: {e}");
        }
    }

    // Land the shell prompt on a fresh line.
    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();
}
