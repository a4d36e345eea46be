//! Event handler for the TUI
//!
//! Routes keyboard events to the error dialog, the open month list, or the
//! report screen controls, and applies fetch results as they arrive.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Control};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::ReportLoaded(outcome) => {
            app.on_fetch_complete(outcome);
            Ok(())
        }
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else if app.dropdown.is_some() {
        handle_dropdown_key(app, key);
    } else {
        handle_screen_key(app, key);
    }
    Ok(())
}

/// The error dialog swallows everything except its close keys
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
        app.close_dialog();
    }
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.dropdown_down(),
        KeyCode::Char('k') | KeyCode::Up => app.dropdown_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm_dropdown(),
        KeyCode::Esc => app.cancel_dropdown(),
        _ => {}
    }
}

fn handle_screen_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Char('b') => app.navigate_back(),

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),

        // Quick month change without opening the list
        KeyCode::Char('j') | KeyCode::Down if app.focus == Control::MonthSelect => {
            app.controller.selection_mut().select_next();
        }
        KeyCode::Char('k') | KeyCode::Up if app.focus == Control::MonthSelect => {
            app.controller.selection_mut().select_prev();
        }

        KeyCode::Char('v') => app.trigger_fetch(),
        KeyCode::Char('d') => app.download_pdf(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Month, UserId};
    use crate::services::controller::tests::FakeSource;
    use crate::services::ReportController;
    use std::sync::mpsc;

    fn app() -> App {
        let (tx, _rx) = mpsc::channel();
        let controller = ReportController::new(FakeSource::with_responses(vec![]), UserId::new("1"));
        App::new(controller, &Settings::default(), tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_month_keys_walk_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.controller.selection().selected(), Some(Month::February));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert!(app.controller.selection().is_empty());
    }

    #[test]
    fn test_enter_opens_and_confirms_dropdown() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.dropdown.is_some());

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.dropdown.is_none());
        assert_eq!(app.controller.selection().selected(), Some(Month::January));
    }

    #[test]
    fn test_dialog_blocks_other_keys() {
        let mut app = app();
        app.show_error(&crate::error::ReportError::http_status(500));

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.has_dialog());

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_download_key_ignored_without_report() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.has_dialog());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_back_leaves_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(app.should_quit);
    }
}
