//! Terminal setup and teardown
//!
//! Handles initializing and restoring the terminal state, including the
//! panic hook that restores the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;

use crate::config::Settings;
use crate::storage::Storage;

use super::app::{ActiveTab, App};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(storage: &Storage, settings: &Settings, sales_file: Option<&Path>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(storage, settings);
    app.refresh_forecast();

    if let Some(path) = sales_file {
        app.load_sales(path);
        app.active_tab = ActiveTab::Sales;
    }

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        handle_event(&mut app, events.next()?)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
