//! TUI views module
//!
//! Contains the forecast and sales tabs, the tab bar, and the status bar.

pub mod forecast;
pub mod sales;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_tab {
        ActiveTab::Forecast => forecast::render(frame, app, layout.main),
        ActiveTab::Sales => sales::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let titles = [ActiveTab::Forecast, ActiveTab::Sales].map(ActiveTab::title);
    let selected = match app.active_tab {
        ActiveTab::Forecast => 0,
        ActiveTab::Sales => 1,
    };

    let tabs = Tabs::new(titles.to_vec())
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::SetBalance => dialogs::balance::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

/// Map a stored color name onto a terminal color
pub fn color_from_name(name: &str) -> Color {
    match name {
        "green" => Color::Green,
        "red" => Color::Red,
        "darkred" => Color::LightRed,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mapping_falls_back_to_white() {
        assert_eq!(color_from_name("green"), Color::Green);
        assert_eq!(color_from_name("chartreuse"), Color::White);
    }
}
