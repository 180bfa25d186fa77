use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Phase};
use crate::config;
use crate::library::{DurationDecoder, compute_total_duration};
use crate::ui;

/// What the loop has to do after a key was handled.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// A folder was confirmed and must be scanned.
    Scan(std::path::PathBuf),
    Quit,
}

/// Main terminal event loop: draws, waits for a key and runs scans.
/// Returns `Ok(())` when the user quits.
///
/// Scans run synchronously on this thread; the UI is frozen until the
/// result is applied, so a frame is drawn first to show the status.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    decoder: &dyn DurationDecoder,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(key, app) {
            KeyOutcome::Continue => {}
            KeyOutcome::Quit => break,
            KeyOutcome::Scan(dir) => {
                terminal.draw(|f| ui::draw(f, app, &settings.ui))?;
                tracing::info!(dir = %dir.display(), "calculating");
                let result = compute_total_duration(&dir, &settings.library, decoder);
                app.finish_calculation(result);
            }
        }
    }

    Ok(())
}

/// Route a key to the error dialog, the chooser or the main view, in that
/// order of precedence.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> KeyOutcome {
    if app.error_dialog.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_error();
        }
        return KeyOutcome::Continue;
    }

    if app.phase == Phase::Selecting {
        return handle_chooser_key(key, app);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('b') | KeyCode::Enter => {
            app.begin_browse();
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn handle_chooser_key(key: KeyEvent, app: &mut App) -> KeyOutcome {
    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Char('c')) {
        return match app.confirm_selection() {
            Some(dir) => KeyOutcome::Scan(dir),
            None => KeyOutcome::Continue,
        };
    }
    if key.code == KeyCode::Esc {
        app.cancel_browse();
        return KeyOutcome::Continue;
    }

    let Some(chooser) = app.chooser.as_mut() else {
        return KeyOutcome::Continue;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => chooser.next(),
        KeyCode::Char('k') | KeyCode::Up => chooser.prev(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => chooser.descend(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => chooser.ascend(),
        _ => {}
    }
    KeyOutcome::Continue
}
