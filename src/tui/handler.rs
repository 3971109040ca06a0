//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or the current tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::dialogs::balance::save_balance;
use super::dialogs::transaction::{save_transaction, TransactionField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::SetBalance),
        KeyCode::Char('r') => {
            app.refresh_forecast();
            app.set_status("Forecast refreshed");
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key dismisses help
            app.close_dialog();
        }
        ActiveDialog::AddTransaction => handle_transaction_key(app, key),
        ActiveDialog::SetBalance => handle_balance_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_transaction_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab => app.transaction_form.next_field(),
        KeyCode::BackTab => app.transaction_form.prev_field(),
        KeyCode::Enter => match save_transaction(&app.transaction_form, app.storage) {
            Ok(message) => {
                app.close_dialog();
                app.refresh_forecast();
                app.set_status(message);
            }
            Err(e) => {
                app.transaction_form.error_message = Some(e.to_string());
            }
        },
        KeyCode::Left if app.transaction_form.focused_field == TransactionField::Mode => {
            app.transaction_form.cycle_mode(false);
        }
        KeyCode::Right if app.transaction_form.focused_field == TransactionField::Mode => {
            app.transaction_form.cycle_mode(true);
        }
        KeyCode::Left => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
}

fn handle_balance_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => match save_balance(
            &app.balance_form,
            app.storage,
            &app.settings.currency_symbol,
        ) {
            Ok(message) => {
                app.close_dialog();
                app.refresh_forecast();
                app.set_status(message);
            }
            Err(e) => {
                app.balance_form.error_message = Some(e.to_string());
            }
        },
        KeyCode::Left => app.balance_form.amount_input.move_left(),
        KeyCode::Right => app.balance_form.amount_input.move_right(),
        KeyCode::Backspace => app.balance_form.amount_input.backspace(),
        KeyCode::Char(c) => app.balance_form.amount_input.insert(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashcastPaths;
    use crate::config::Settings;
    use crate::storage::Storage;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app_fixture() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let paths = CashcastPaths::with_base_dir(dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_quit_key() {
        let (_dir, storage) = test_app_fixture();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switches_and_dialog_opens() {
        let (_dir, storage) = test_app_fixture();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_tab, super::super::app::ActiveTab::Sales);

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_balance_status_uses_configured_symbol() {
        let (_dir, storage) = test_app_fixture();
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        let mut app = App::new(&storage, &settings);

        app.open_dialog(ActiveDialog::SetBalance);
        for c in "250".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.status_message.as_deref(), Some("Balance set to €250.00"));
    }

    #[test]
    fn test_dialog_validation_error_stays_open() {
        let (_dir, storage) = test_app_fixture();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.open_dialog(ActiveDialog::AddTransaction);
        // Empty form: amount fails to parse
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert!(app.transaction_form.error_message.is_some());
    }
}
